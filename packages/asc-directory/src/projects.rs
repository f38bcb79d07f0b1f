use asc_domain::{Project, labels};

use crate::{
	entry::{ActiveFilter, DirectoryEntry, FacetSet, SortMode},
	filter,
};

/// Project directory criteria: status, source, and topic.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectFacets {
	pub status: Option<String>,
	pub source: Option<String>,
	pub topic: Option<String>,
}

impl FacetSet<Project> for ProjectFacets {
	fn matches(&self, project: &Project) -> bool {
		if !filter::facet_matches(self.status.as_deref(), project.status.key()) {
			return false;
		}
		if !filter::facet_matches(self.source.as_deref(), project.source.key()) {
			return false;
		}
		if let Some(topic) = &self.topic
			&& !filter::topic_matches(&project.topics, topic)
		{
			return false;
		}

		true
	}

	fn is_empty(&self) -> bool {
		self.status.is_none() && self.source.is_none() && self.topic.is_none()
	}

	fn active_filters(&self) -> Vec<ActiveFilter> {
		let mut filters = Vec::new();

		if let Some(status) = &self.status {
			filters.push(ActiveFilter {
				criterion: "status",
				value: labels::PROJECT_STATUSES.get(status).label.to_string(),
			});
		}
		if let Some(source) = &self.source {
			filters.push(ActiveFilter {
				criterion: "source",
				value: labels::PROJECT_SOURCES.get(source).label.to_string(),
			});
		}
		if let Some(topic) = &self.topic {
			filters.push(ActiveFilter { criterion: "topic", value: topic.clone() });
		}

		filters
	}
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectSort {
	#[default]
	Relevance,
	Newest,
	Papers,
	Title,
}

impl ProjectSort {
	pub fn parse(raw: &str) -> Self {
		match raw {
			"relevance" => Self::Relevance,
			"newest" => Self::Newest,
			"papers" => Self::Papers,
			"title" => Self::Title,
			_ => {
				tracing::debug!(sort = raw, "Unrecognized project sort, using the default.");

				Self::default()
			},
		}
	}
}

impl SortMode<Project> for ProjectSort {
	fn order(self, items: &mut Vec<&Project>) {
		match self {
			// The catalog's own order is the default ordering.
			Self::Relevance => {},
			Self::Newest =>
				items.sort_by(|left, right| right.start_date.cmp(&left.start_date)),
			Self::Papers =>
				items.sort_by(|left, right| right.paper_output().cmp(&left.paper_output())),
			Self::Title => items.sort_by(|left, right| left.title.cmp(&right.title)),
		}
	}

	fn is_relevance(self) -> bool {
		self == Self::Relevance
	}
}

impl DirectoryEntry for Project {
	type Facets = ProjectFacets;
	type Sort = ProjectSort;

	fn headline(&self) -> &str {
		&self.title
	}

	fn topics(&self) -> &[String] {
		&self.topics
	}

	fn search_text(&self) -> String {
		let leads: Vec<&str> = self.leads.iter().map(|lead| lead.name.as_str()).collect();

		format!(
			"{} {} {} {} {}",
			self.title,
			self.description,
			self.topics.join(" "),
			leads.join(" "),
			self.organizations.join(" "),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sort_parsing_falls_back_to_relevance() {
		assert_eq!(ProjectSort::parse("newest"), ProjectSort::Newest);
		assert_eq!(ProjectSort::parse("oldest"), ProjectSort::Relevance);
	}
}

use asc_domain::{Researcher, labels};

use crate::{
	entry::{ActiveFilter, DirectoryEntry, FacetSet, SortMode},
	filter,
};

/// Researcher directory criteria: community membership and research topic.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResearcherFacets {
	pub community: Option<String>,
	pub topic: Option<String>,
}

impl FacetSet<Researcher> for ResearcherFacets {
	fn matches(&self, researcher: &Researcher) -> bool {
		if let Some(community) = &self.community
			&& !researcher.in_community(community)
		{
			return false;
		}
		if let Some(topic) = &self.topic
			&& !filter::topic_matches(&researcher.topics, topic)
		{
			return false;
		}

		true
	}

	fn is_empty(&self) -> bool {
		self.community.is_none() && self.topic.is_none()
	}

	fn active_filters(&self) -> Vec<ActiveFilter> {
		let mut filters = Vec::new();

		if let Some(community) = &self.community {
			filters.push(ActiveFilter {
				criterion: "community",
				value: labels::COMMUNITIES.get(community).label.to_string(),
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
pub enum ResearcherSort {
	#[default]
	Relevance,
	Papers,
	Posts,
	Hindex,
	Name,
}

impl ResearcherSort {
	pub fn parse(raw: &str) -> Self {
		match raw {
			"relevance" => Self::Relevance,
			"papers" => Self::Papers,
			"posts" => Self::Posts,
			"hindex" => Self::Hindex,
			"name" => Self::Name,
			_ => {
				tracing::debug!(sort = raw, "Unrecognized researcher sort, using the default.");

				Self::default()
			},
		}
	}
}

impl SortMode<Researcher> for ResearcherSort {
	fn order(self, items: &mut Vec<&Researcher>) {
		match self {
			// The catalog's own order is the default ordering.
			Self::Relevance => {},
			Self::Papers => items.sort_by(|left, right| right.papers.cmp(&left.papers)),
			Self::Posts => items.sort_by(|left, right| right.posts.cmp(&left.posts)),
			Self::Hindex => items.sort_by(|left, right| right.h_index.cmp(&left.h_index)),
			Self::Name => items.sort_by(|left, right| left.name.cmp(&right.name)),
		}
	}

	fn is_relevance(self) -> bool {
		self == Self::Relevance
	}
}

impl DirectoryEntry for Researcher {
	type Facets = ResearcherFacets;
	type Sort = ResearcherSort;

	fn headline(&self) -> &str {
		&self.name
	}

	fn topics(&self) -> &[String] {
		&self.topics
	}

	fn search_text(&self) -> String {
		format!("{} {} {} {}", self.name, self.affiliation, self.bio, self.topics.join(" "))
	}
}

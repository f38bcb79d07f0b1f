use std::cmp::Ordering;

use asc_domain::{Paper, labels};

use crate::{
	entry::{ActiveFilter, DirectoryEntry, FacetSet, SortMode},
	filter::{self, YearFilter},
};

/// Paper directory criteria: source, topic, and publication year.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaperFacets {
	pub source: Option<String>,
	pub topic: Option<String>,
	/// A year such as `"2024"` or a `"before-"` bound such as
	/// `"before-2019"`.
	pub year: Option<String>,
}

impl FacetSet<Paper> for PaperFacets {
	fn matches(&self, paper: &Paper) -> bool {
		if !filter::facet_matches(self.source.as_deref(), paper.source.key()) {
			return false;
		}
		if let Some(topic) = &self.topic
			&& !filter::topic_matches(&paper.topics, topic)
		{
			return false;
		}
		if let Some(raw) = &self.year {
			let Some(year) = YearFilter::parse(raw) else {
				return false;
			};

			if !year.matches(paper.year) {
				return false;
			}
		}

		true
	}

	fn is_empty(&self) -> bool {
		self.source.is_none() && self.topic.is_none() && self.year.is_none()
	}

	fn active_filters(&self) -> Vec<ActiveFilter> {
		let mut filters = Vec::new();

		if let Some(source) = &self.source {
			filters.push(ActiveFilter {
				criterion: "source",
				value: labels::PAPER_SOURCES.get(source).label.to_string(),
			});
		}
		if let Some(topic) = &self.topic {
			filters.push(ActiveFilter { criterion: "topic", value: topic.clone() });
		}
		if let Some(raw) = &self.year {
			let value =
				YearFilter::parse(raw).map(|year| year.to_string()).unwrap_or_else(|| raw.clone());

			filters.push(ActiveFilter { criterion: "year", value });
		}

		filters
	}
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperSort {
	#[default]
	Relevance,
	Citations,
	Year,
	Karma,
	Title,
}

impl PaperSort {
	/// Maps a stored sort selection to a mode, falling back to the default
	/// instead of failing on values outside the vocabulary.
	pub fn parse(raw: &str) -> Self {
		match raw {
			"relevance" => Self::Relevance,
			"citations" => Self::Citations,
			"year" => Self::Year,
			"karma" => Self::Karma,
			"title" => Self::Title,
			_ => {
				tracing::debug!(sort = raw, "Unrecognized paper sort, using the default.");

				Self::default()
			},
		}
	}
}

impl SortMode<Paper> for PaperSort {
	fn order(self, items: &mut Vec<&Paper>) {
		match self {
			// Newest first is the paper catalog's default ordering.
			Self::Relevance | Self::Year => items.sort_by(|left, right| {
				match right.year.cmp(&left.year) {
					Ordering::Equal => right.citations.cmp(&left.citations),
					other => other,
				}
			}),
			Self::Citations =>
				items.sort_by(|left, right| right.citations.cmp(&left.citations)),
			Self::Karma => items.sort_by(|left, right| {
				right.karma.unwrap_or(0).cmp(&left.karma.unwrap_or(0))
			}),
			Self::Title => items.sort_by(|left, right| left.title.cmp(&right.title)),
		}
	}

	fn is_relevance(self) -> bool {
		self == Self::Relevance
	}
}

impl DirectoryEntry for Paper {
	type Facets = PaperFacets;
	type Sort = PaperSort;

	fn headline(&self) -> &str {
		&self.title
	}

	fn topics(&self) -> &[String] {
		&self.topics
	}

	fn search_text(&self) -> String {
		let authors: Vec<&str> = self.authors.iter().map(|author| author.name.as_str()).collect();

		format!("{} {} {} {}", self.title, self.r#abstract, self.topics.join(" "), authors.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sort_parsing_falls_back_to_relevance() {
		assert_eq!(PaperSort::parse("karma"), PaperSort::Karma);
		assert_eq!(PaperSort::parse("recency"), PaperSort::Relevance);
	}

	#[test]
	fn empty_facets_select_everything() {
		let facets = PaperFacets::default();

		assert!(facets.is_empty());
		assert!(facets.active_filters().is_empty());
	}
}

use std::fmt;

use crate::text;

/// A catalog entity the generic browse pipeline knows how to search, facet,
/// and order. Implementations provide the entity-specific text fields and the
/// facet/sort vocabularies; the pipeline owns everything else.
pub trait DirectoryEntry: Sized {
	type Facets: FacetSet<Self>;
	type Sort: SortMode<Self>;

	/// Primary display field, title for papers and projects, name for
	/// researchers. Words found here score highest for relevance.
	fn headline(&self) -> &str;

	fn topics(&self) -> &[String];

	/// Concatenation of every text field a query is matched against. The
	/// field set is fixed per entity type.
	fn search_text(&self) -> String;
}

/// One directory's filter criteria. Every criterion is independently
/// optional and criteria combine with AND.
pub trait FacetSet<E>: Clone + fmt::Debug + Default + PartialEq {
	/// Whether the entry satisfies every selected criterion. A selection
	/// outside the known vocabulary matches nothing rather than failing.
	fn matches(&self, entry: &E) -> bool;

	/// True when no criterion is selected.
	fn is_empty(&self) -> bool;

	fn active_filters(&self) -> Vec<ActiveFilter>;
}

/// One directory's sort vocabulary.
pub trait SortMode<E>: Copy + fmt::Debug + Default + PartialEq {
	/// Reorders the filtered sequence in place. Relevance mode applies the
	/// catalog's default ordering here; scored ordering only happens in the
	/// pipeline when a query is present. Sorts must be stable.
	fn order(self, items: &mut Vec<&E>);

	fn is_relevance(self) -> bool;
}

/// Canonicalized view of one entry's searchable text, built once per entry
/// per browse pass.
#[derive(Clone, Debug)]
pub struct SearchDoc {
	pub headline: String,
	pub topics: Vec<String>,
	pub text: String,
}

impl SearchDoc {
	pub fn build<E: DirectoryEntry>(entry: &E) -> Self {
		Self {
			headline: text::canonicalize(entry.headline()),
			topics: entry.topics().iter().map(|topic| text::canonicalize(topic)).collect(),
			text: text::canonicalize(&entry.search_text()),
		}
	}
}

/// Human-readable summary of one selected criterion, derived state only.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ActiveFilter {
	pub criterion: &'static str,
	pub value: String,
}

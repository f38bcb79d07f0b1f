//! Shared search, filter, sort, and pagination pipeline for the researcher,
//! paper, and project directories. One generic pass over an immutable
//! catalog; the per-entity modules only supply text extractors and the
//! facet/sort vocabularies.

pub mod browse;
pub mod entry;
pub mod filter;
pub mod page;
pub mod papers;
pub mod projects;
pub mod relevance;
pub mod researchers;
pub mod state;
pub mod text;

pub use browse::{BrowsePage, BrowseRequest, browse};
pub use entry::{ActiveFilter, DirectoryEntry, FacetSet, SearchDoc, SortMode};
pub use filter::{TextMatch, YearFilter};
pub use papers::{PaperFacets, PaperSort};
pub use projects::{ProjectFacets, ProjectSort};
pub use researchers::{ResearcherFacets, ResearcherSort};
pub use state::{DirectoryState, ViewMode};

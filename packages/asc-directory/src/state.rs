use unicode_segmentation::UnicodeSegmentation;

use crate::{
	browse::{BrowsePage, BrowseRequest, browse},
	entry::{ActiveFilter, DirectoryEntry, FacetSet},
	filter::TextMatch,
};

const QUERY_SUMMARY_GRAPHEMES: usize = 20;

/// Presentation toggle carried alongside the filters, grid by default.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
	#[default]
	Grid,
	List,
}

/// Holds one directory's current selections and derives pages from them.
/// Every mutation that changes which results qualify snaps the page back to
/// the first one; only explicit page navigation keeps the rest of the state.
pub struct DirectoryState<E: DirectoryEntry> {
	request: BrowseRequest<E>,
	view: ViewMode,
	page_size: usize,
}

impl<E: DirectoryEntry> DirectoryState<E> {
	pub fn new(page_size: usize) -> Self {
		Self { request: BrowseRequest::default(), view: ViewMode::default(), page_size }
	}

	pub fn request(&self) -> &BrowseRequest<E> {
		&self.request
	}

	pub fn view(&self) -> ViewMode {
		self.view
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn set_query(&mut self, query: Option<String>) {
		self.request.query =
			query.map(|raw| raw.trim().to_string()).filter(|trimmed| !trimmed.is_empty());
		self.request.page = 1;
	}

	pub fn set_text_match(&mut self, mode: TextMatch) {
		self.request.text_match = mode;
		self.request.page = 1;
	}

	/// Applies a facet change through the entity's facet record.
	pub fn update_facets(&mut self, update: impl FnOnce(&mut E::Facets)) {
		update(&mut self.request.facets);
		self.request.page = 1;
	}

	pub fn set_sort(&mut self, sort: E::Sort) {
		self.request.sort = sort;
		self.request.page = 1;
	}

	/// Stores the requested page without touching any filter. The value is
	/// clamped against the result size on the next derive.
	pub fn set_page(&mut self, page: usize) {
		self.request.page = page.max(1);
	}

	pub fn set_view(&mut self, view: ViewMode) {
		self.view = view;
	}

	/// Drops the query and every facet selection in one step and returns to
	/// the first page. Sort, match mode, and view survive.
	pub fn clear_filters(&mut self) {
		self.request.query = None;
		self.request.facets = E::Facets::default();
		self.request.page = 1;
	}

	pub fn has_filters(&self) -> bool {
		self.request.query.is_some() || !self.request.facets.is_empty()
	}

	/// Derived summaries of every non-default criterion, for display and for
	/// the clear-all affordance. Never authoritative, always recomputed.
	pub fn active_filters(&self) -> Vec<ActiveFilter> {
		let mut filters = Vec::new();

		if let Some(query) = &self.request.query {
			filters.push(ActiveFilter { criterion: "search", value: summarize_query(query) });
		}

		filters.extend(self.request.facets.active_filters());

		filters
	}

	/// Runs the pipeline for the current selections. The clamped page is
	/// written back so page navigation continues from what was rendered.
	pub fn derive<'a>(&mut self, catalog: &'a [E]) -> BrowsePage<'a, E> {
		let page = browse(catalog, &self.request, self.page_size);

		self.request.page = page.current_page;

		page
	}
}

fn summarize_query(query: &str) -> String {
	match query.grapheme_indices(true).nth(QUERY_SUMMARY_GRAPHEMES) {
		Some((offset, _)) => format!("{}...", &query[..offset]),
		None => query.to_string(),
	}
}

use std::fmt::{self, Debug, Formatter};

use crate::{
	entry::{DirectoryEntry, FacetSet, SearchDoc, SortMode},
	filter::{self, TextMatch},
	page, relevance, text,
};

/// One directory query, plain data over an immutable catalog.
pub struct BrowseRequest<E: DirectoryEntry> {
	pub query: Option<String>,
	pub text_match: TextMatch,
	pub facets: E::Facets,
	pub sort: E::Sort,
	/// 1-based; out-of-range values are clamped, not rejected.
	pub page: usize,
}

impl<E: DirectoryEntry> Clone for BrowseRequest<E> {
	fn clone(&self) -> Self {
		Self {
			query: self.query.clone(),
			text_match: self.text_match,
			facets: self.facets.clone(),
			sort: self.sort,
			page: self.page,
		}
	}
}

impl<E: DirectoryEntry> Debug for BrowseRequest<E> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("BrowseRequest")
			.field("query", &self.query)
			.field("text_match", &self.text_match)
			.field("facets", &self.facets)
			.field("sort", &self.sort)
			.field("page", &self.page)
			.finish()
	}
}

impl<E: DirectoryEntry> Default for BrowseRequest<E> {
	fn default() -> Self {
		Self {
			query: None,
			text_match: TextMatch::default(),
			facets: E::Facets::default(),
			sort: E::Sort::default(),
			page: 1,
		}
	}
}

impl<E: DirectoryEntry> PartialEq for BrowseRequest<E> {
	fn eq(&self, other: &Self) -> bool {
		self.query == other.query
			&& self.text_match == other.text_match
			&& self.facets == other.facets
			&& self.sort == other.sort
			&& self.page == other.page
	}
}

/// One rendered page of a directory, borrowing from the catalog.
#[derive(Debug)]
pub struct BrowsePage<'a, E> {
	pub items: Vec<&'a E>,
	pub total_count: usize,
	pub total_pages: usize,
	pub current_page: usize,
}

/// Runs the full filter, rank, and paginate pass over a catalog. Pure, the
/// catalog is never reordered and equal inputs produce equal pages.
pub fn browse<'a, E: DirectoryEntry>(
	catalog: &'a [E],
	request: &BrowseRequest<E>,
	page_size: usize,
) -> BrowsePage<'a, E> {
	let query = request
		.query
		.as_deref()
		.map(|raw| text::canonicalize(raw).trim().to_string())
		.filter(|canonical| !canonical.is_empty());
	let scored = query.as_deref().map(|canonical| (canonical, text::tokenize(canonical)));
	let mut hits: Vec<(u32, &'a E)> = Vec::with_capacity(catalog.len());

	for entry in catalog {
		if !request.facets.matches(entry) {
			continue;
		}

		let Some((canonical, words)) = &scored else {
			hits.push((0, entry));

			continue;
		};
		let doc = SearchDoc::build(entry);

		if !filter::text_matches(request.text_match, &doc, canonical, words) {
			continue;
		}

		hits.push((relevance::score(words, &doc), entry));
	}

	let total_count = hits.len();
	let total_pages = page::total_pages(total_count, page_size);
	let current_page = page::clamp(request.page, total_pages);
	let items = if request.sort.is_relevance() && scored.is_some() {
		// Stable sort, score ties keep catalog order.
		hits.sort_by(|left, right| right.0.cmp(&left.0));

		hits.into_iter().map(|(_, entry)| entry).collect()
	} else {
		let mut items: Vec<&'a E> = hits.into_iter().map(|(_, entry)| entry).collect();

		request.sort.order(&mut items);

		items
	};

	tracing::debug!(total = total_count, page = current_page, "Browsed a directory catalog.");

	BrowsePage {
		items: page::slice(&items, current_page, page_size).to_vec(),
		total_count,
		total_pages,
		current_page,
	}
}

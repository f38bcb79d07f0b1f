/// Page count for a result of `total` items. An empty result still has one
/// page so the pager always has something to render. `page_size` must be
/// positive.
pub fn total_pages(total: usize, page_size: usize) -> usize {
	if total == 0 {
		return 1;
	}

	total.div_ceil(page_size)
}

/// Clamps a requested 1-based page into `[1, total_pages]`.
pub fn clamp(page: usize, total_pages: usize) -> usize {
	page.clamp(1, total_pages)
}

/// The window `[(page - 1) * page_size, min(page * page_size, len))` of an
/// ordered result. Pages past the end are empty.
pub fn slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
	let start = page.saturating_sub(1) * page_size;

	if start >= items.len() {
		return &[];
	}

	let end = (start + page_size).min(items.len());

	&items[start..end]
}

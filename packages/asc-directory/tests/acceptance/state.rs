use asc_directory::{DirectoryState, PaperSort, TextMatch, ViewMode};
use asc_domain::Paper;

use super::search_papers;

fn paper_state() -> DirectoryState<Paper> {
	DirectoryState::new(10)
}

#[test]
fn filter_changes_reset_the_page() {
	let mut state = paper_state();

	state.set_page(3);
	state.set_query(Some("oversight".to_string()));
	assert_eq!(state.request().page, 1);

	state.set_page(3);
	state.update_facets(|facets| facets.source = Some("ea".to_string()));
	assert_eq!(state.request().page, 1);

	state.set_page(3);
	state.set_sort(PaperSort::Citations);
	assert_eq!(state.request().page, 1);

	state.set_page(3);
	state.set_text_match(TextMatch::Broad);
	assert_eq!(state.request().page, 1);
}

#[test]
fn page_navigation_keeps_the_rest() {
	let mut state = paper_state();

	state.set_query(Some("ai".to_string()));
	state.set_page(2);

	assert_eq!(state.request().query.as_deref(), Some("ai"));
	assert_eq!(state.request().page, 2);
}

#[test]
fn clearing_filters_restores_the_default_state() {
	let mut state = paper_state();

	state.set_query(Some("x".to_string()));
	state.update_facets(|facets| {
		facets.source = Some("academic".to_string());
		facets.topic = Some("Alignment".to_string());
	});
	state.set_page(2);
	state.clear_filters();

	assert_eq!(state.request(), paper_state().request());
	assert!(state.active_filters().is_empty());
	assert!(!state.has_filters());
}

#[test]
fn active_filters_are_derived_labels() {
	let mut state = paper_state();

	state.set_query(Some("a very long query about corrigibility".to_string()));
	state.update_facets(|facets| {
		facets.source = Some("ea".to_string());
		facets.year = Some("before-2019".to_string());
	});

	let filters = state.active_filters();
	let values: Vec<(&str, &str)> =
		filters.iter().map(|filter| (filter.criterion, filter.value.as_str())).collect();

	assert_eq!(values, [
		("search", "a very long query ab..."),
		("source", "EA Forum"),
		("year", "Before 2019"),
	]);
}

#[test]
fn derive_writes_the_clamped_page_back() {
	let papers = search_papers();
	let mut state = DirectoryState::<Paper>::new(2);

	state.set_page(9);

	let page = state.derive(&papers);

	assert_eq!(page.total_pages, 2);
	assert_eq!(page.current_page, 2);
	assert_eq!(state.request().page, 2);
}

#[test]
fn view_mode_is_pass_through() {
	let mut state = paper_state();

	state.set_page(2);
	state.set_view(ViewMode::List);

	assert_eq!(state.view(), ViewMode::List);
	assert_eq!(state.request().page, 2);
}

use asc_directory::{BrowseRequest, ProjectFacets, browse};
use asc_domain::Project;

use super::{project_ids, sixteen_projects};

#[test]
fn sixteen_items_split_into_nine_and_seven() {
	let projects = sixteen_projects();
	let first = browse(&projects, &BrowseRequest::default(), 9);
	let second =
		browse(&projects, &BrowseRequest::<Project> { page: 2, ..Default::default() }, 9);

	assert_eq!(first.total_pages, 2);
	assert_eq!(first.total_count, 16);
	assert_eq!(first.items.len(), 9);
	assert_eq!(second.items.len(), 7);
	assert_eq!(project_ids(&first)[0], "1");
	assert_eq!(project_ids(&second)[0], "10");
}

#[test]
fn pages_concatenate_to_the_full_result() {
	let projects = sixteen_projects();
	let mut seen: Vec<&str> = Vec::new();

	for page_index in 1..=4 {
		let request = BrowseRequest::<Project> { page: page_index, ..Default::default() };
		let page = browse(&projects, &request, 5);

		assert_eq!(page.total_pages, 4);
		seen.extend(project_ids(&page));
	}

	let expected: Vec<String> = (1..=16).map(|index| index.to_string()).collect();

	assert_eq!(seen, expected);
}

#[test]
fn empty_results_keep_a_single_page() {
	let projects = sixteen_projects();
	let request = BrowseRequest::<Project> {
		facets: ProjectFacets { status: Some("archived".to_string()), ..Default::default() },
		page: 3,
		..Default::default()
	};
	let page = browse(&projects, &request, 9);

	assert!(page.items.is_empty());
	assert_eq!(page.total_count, 0);
	assert_eq!(page.total_pages, 1);
	assert_eq!(page.current_page, 1);
}

#[test]
fn out_of_range_pages_clamp_to_the_last() {
	let projects = sixteen_projects();
	let request = BrowseRequest::<Project> { page: 99, ..Default::default() };
	let page = browse(&projects, &request, 9);

	assert_eq!(page.current_page, 2);
	assert_eq!(page.items.len(), 7);
	assert_eq!(project_ids(&page)[0], "10");
}

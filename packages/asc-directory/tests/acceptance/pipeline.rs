use asc_directory::{BrowseRequest, PaperFacets, PaperSort, ProjectFacets, TextMatch, browse};
use asc_domain::{Paper, Project, ProjectStatus};

use super::{paper_ids, project_ids, search_papers, sixteen_projects};

#[test]
fn filtering_preserves_catalog_order() {
	let mut projects = sixteen_projects();

	projects[4].status = ProjectStatus::Paused;
	projects[9].status = ProjectStatus::Paused;

	let request = BrowseRequest::<Project> {
		facets: ProjectFacets { status: Some("paused".to_string()), ..Default::default() },
		..Default::default()
	};
	let page = browse(&projects, &request, 9);

	assert_eq!(project_ids(&page), ["5", "10"]);
	assert!(page.total_count <= projects.len());
}

#[test]
fn criteria_combine_with_and() {
	let mut projects = sixteen_projects();

	projects[0].topics = vec!["Interpretability".to_string()];
	projects[1].topics = vec!["Interpretability".to_string()];
	projects[1].status = ProjectStatus::Completed;

	let request = BrowseRequest::<Project> {
		facets: ProjectFacets {
			status: Some("active".to_string()),
			topic: Some("Interpretability".to_string()),
			..Default::default()
		},
		..Default::default()
	};
	let page = browse(&projects, &request, 9);

	assert_eq!(project_ids(&page), ["1"]);
}

#[test]
fn unknown_facet_values_match_nothing() {
	let papers = search_papers();
	let request = BrowseRequest::<Paper> {
		facets: PaperFacets { source: Some("substack".to_string()), ..Default::default() },
		..Default::default()
	};
	let page = browse(&papers, &request, 10);

	assert!(page.items.is_empty());
	assert_eq!(page.total_count, 0);
	assert_eq!(page.total_pages, 1);
	assert_eq!(page.current_page, 1);
}

#[test]
fn browsing_is_idempotent() {
	let papers = search_papers();
	let request = BrowseRequest::<Paper> {
		query: Some("alignment".to_string()),
		text_match: TextMatch::Broad,
		..Default::default()
	};
	let first = browse(&papers, &request, 10);
	let second = browse(&papers, &request, 10);

	assert_eq!(paper_ids(&first), paper_ids(&second));
	assert_eq!(first.total_pages, second.total_pages);
	assert_eq!(first.current_page, second.current_page);
}

#[test]
fn equal_sort_keys_keep_input_order() {
	let mut papers = search_papers();

	for paper in &mut papers {
		paper.citations = 42;
	}

	let request = BrowseRequest::<Paper> { sort: PaperSort::Citations, ..Default::default() };
	let page = browse(&papers, &request, 10);

	assert_eq!(paper_ids(&page), [1, 2, 3]);
}

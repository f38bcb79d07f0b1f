use asc_directory::{
	BrowseRequest, PaperFacets, ProjectFacets, ResearcherFacets, TextMatch, browse,
};
use asc_domain::{Catalog, Paper, Project, Researcher};

use super::{paper_ids, project_ids};

#[test]
fn active_projects_match_the_embedded_catalog() {
	let catalog = Catalog::shared().expect("catalog");
	let request = BrowseRequest::<Project> {
		facets: ProjectFacets { status: Some("active".to_string()), ..Default::default() },
		..Default::default()
	};
	let page = browse(catalog.projects(), &request, 16);

	assert_eq!(page.total_count, 12);
	assert_eq!(project_ids(&page), [
		"1", "2", "3", "4", "6", "7", "8", "9", "10", "11", "14", "16",
	]);
}

#[test]
fn year_bounds_split_the_paper_catalog() {
	let catalog = Catalog::shared().expect("catalog");
	let request = BrowseRequest::<Paper> {
		facets: PaperFacets { year: Some("before-2019".to_string()), ..Default::default() },
		..Default::default()
	};
	let page = browse(catalog.papers(), &request, 20);

	assert_eq!(page.total_count, 5);
	assert!(page.items.iter().all(|paper| paper.year < 2019));
}

#[test]
fn community_selection_uses_membership() {
	let catalog = Catalog::shared().expect("catalog");
	let request = BrowseRequest::<Researcher> {
		facets: ResearcherFacets { community: Some("lesswrong".to_string()), ..Default::default() },
		..Default::default()
	};
	let page = browse(catalog.researchers(), &request, 12);
	let slugs: Vec<&str> = page.items.iter().map(|researcher| researcher.slug.as_str()).collect();

	assert_eq!(slugs, [
		"sarah-chen",
		"eliezer-yudkowsky",
		"paul-christiano",
		"neel-nanda",
		"jan-leike",
		"katja-grace",
		"richard-ngo",
	]);
}

#[test]
fn broad_search_spans_the_paper_catalog() {
	let catalog = Catalog::shared().expect("catalog");
	let request = BrowseRequest::<Paper> {
		query: Some("rlhf".to_string()),
		text_match: TextMatch::Broad,
		..Default::default()
	};
	let page = browse(catalog.papers(), &request, 20);

	assert_eq!(paper_ids(&page), [4]);
}

#[test]
fn papers_default_to_newest_first() {
	let catalog = Catalog::shared().expect("catalog");
	let page = browse(catalog.papers(), &BrowseRequest::default(), 20);

	assert_eq!(paper_ids(&page)[..3], [1, 2, 17]);
}

use asc_directory::{BrowseRequest, PaperSort, TextMatch, browse};
use asc_domain::Paper;

use super::{paper_ids, search_papers};

fn query(raw: &str, mode: TextMatch) -> BrowseRequest<Paper> {
	BrowseRequest { query: Some(raw.to_string()), text_match: mode, ..Default::default() }
}

#[test]
fn broad_search_reaches_synonym_matches() {
	let papers = search_papers();
	let page = browse(&papers, &query("alignment", TextMatch::Broad), 10);

	assert_eq!(paper_ids(&page), [1, 2]);
}

#[test]
fn exact_search_requires_the_literal_query() {
	let papers = search_papers();

	assert_eq!(paper_ids(&browse(&papers, &query("alignment", TextMatch::Exact), 10)), [1]);
	assert_eq!(paper_ids(&browse(&papers, &query("agents aligned", TextMatch::Exact), 10)), [2]);
}

#[test]
fn matching_folds_case() {
	let papers = search_papers();

	assert_eq!(paper_ids(&browse(&papers, &query("VALUE ALIGNMENT", TextMatch::Exact), 10)), [1]);
}

#[test]
fn relevance_prefers_headline_hits() {
	let mut papers = search_papers();

	papers[2].r#abstract = "Alignment is mentioned in passing.".to_string();

	let page = browse(&papers, &query("alignment", TextMatch::Exact), 10);

	assert_eq!(paper_ids(&page), [1, 3]);
}

#[test]
fn explicit_sorts_override_relevance() {
	let papers = search_papers();
	let mut request = query("alignment", TextMatch::Broad);

	request.sort = PaperSort::Citations;

	let page = browse(&papers, &request, 10);

	assert_eq!(paper_ids(&page), [2, 1]);
}

#[test]
fn relevance_without_query_uses_default_ordering() {
	let papers = search_papers();
	let page = browse(&papers, &BrowseRequest::default(), 10);

	assert_eq!(paper_ids(&page), [1, 2, 3]);
}

#[test]
fn blank_queries_are_ignored() {
	let papers = search_papers();
	let request = BrowseRequest::<Paper> { query: Some("   ".to_string()), ..Default::default() };

	assert_eq!(paper_ids(&browse(&papers, &request, 10)), [1, 2, 3]);
}

#[test]
fn citation_sort_is_descending() {
	let papers = search_papers();
	let request = BrowseRequest::<Paper> { sort: PaperSort::Citations, ..Default::default() };
	let page = browse(&papers, &request, 10);
	let citations: Vec<u32> = page.items.iter().map(|paper| paper.citations).collect();

	assert_eq!(citations, [200, 50, 10]);
}

#[test]
fn numeric_sorts_treat_missing_metrics_as_zero() {
	let papers = search_papers();
	let request = BrowseRequest::<Paper> { sort: PaperSort::Karma, ..Default::default() };

	assert_eq!(paper_ids(&browse(&papers, &request, 10)), [3, 2, 1]);
}

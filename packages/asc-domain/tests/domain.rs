use asc_domain::{
	Catalog, Community, Error, Paper, PaperSource, PersonRef, Project, ProjectLinks,
	ProjectSource, ProjectStatus, Researcher, labels,
};

fn researcher(id: u32, slug: &str) -> Researcher {
	Researcher {
		id,
		slug: slug.to_string(),
		name: format!("Researcher {id}"),
		avatar: "RN".to_string(),
		affiliation: "Test Lab".to_string(),
		communities: vec![Community::Academic],
		topics: vec!["Interpretability".to_string()],
		papers: 1,
		posts: 0,
		h_index: 1,
		bio: "Studies small systems.".to_string(),
		full_bio: None,
		website: None,
		twitter: None,
		google_scholar: None,
		publications: Vec::new(),
		recent_posts: Vec::new(),
		collaborators: Vec::new(),
	}
}

fn paper(id: u32, title: &str) -> Paper {
	Paper {
		id,
		title: title.to_string(),
		authors: vec![PersonRef { name: "Test Author".to_string(), slug: None }],
		r#abstract: "A short abstract.".to_string(),
		source: PaperSource::Academic,
		year: 2024,
		venue: "arXiv".to_string(),
		topics: vec!["Alignment".to_string()],
		citations: 1,
		karma: None,
		comments: None,
		url: None,
	}
}

fn project(id: &str, slug: &str, start: &str, end: Option<&str>) -> Project {
	Project {
		id: id.to_string(),
		slug: slug.to_string(),
		title: format!("Project {id}"),
		description: "A test project.".to_string(),
		long_description: None,
		status: ProjectStatus::Active,
		source: ProjectSource::Academic,
		topics: vec!["Alignment".to_string()],
		leads: vec![PersonRef { name: "Lead".to_string(), slug: None }],
		collaborators: Vec::new(),
		organizations: Vec::new(),
		start_date: start.parse().expect("start date"),
		end_date: end.map(|value| value.parse().expect("end date")),
		funding: None,
		links: ProjectLinks::default(),
		outputs: None,
	}
}

#[test]
fn embedded_catalog_loads() {
	let catalog = Catalog::load().expect("catalog");

	assert_eq!(catalog.researchers().len(), 12);
	assert_eq!(catalog.papers().len(), 17);
	assert_eq!(catalog.projects().len(), 16);
}

#[test]
fn shared_catalog_is_cached() {
	let first = Catalog::shared().expect("catalog");
	let second = Catalog::shared().expect("catalog");

	assert!(std::ptr::eq(first, second));
}

#[test]
fn looks_up_researchers_by_slug_and_id() {
	let catalog = Catalog::shared().expect("catalog");
	let researcher = catalog.researcher_by_slug("sarah-chen").expect("known slug");

	assert_eq!(researcher.id, 1);
	assert_eq!(catalog.researcher_by_id(5).map(|found| found.slug.as_str()), Some("neel-nanda"));
	assert!(catalog.researcher_by_slug("nobody-here").is_none());
}

#[test]
fn looks_up_projects_by_slug() {
	let catalog = Catalog::shared().expect("catalog");
	let project = catalog.project_by_slug("eliciting-latent-knowledge").expect("known slug");

	assert_eq!(project.id, "8");
	assert_eq!(project.status, ProjectStatus::Active);
	assert!(catalog.project_by_slug("missing-project").is_none());
}

#[test]
fn resolves_collaborators_in_listed_order() {
	let catalog = Catalog::shared().expect("catalog");
	let researcher = catalog.researcher_by_slug("sarah-chen").expect("known slug");
	let names: Vec<_> = catalog
		.collaborators_of(researcher)
		.into_iter()
		.map(|collaborator| collaborator.name.as_str())
		.collect();

	assert_eq!(names, ["Neel Nanda", "Dr. Jan Leike", "Dr. Paul Christiano"]);
}

#[test]
fn resolves_person_refs_through_their_slug() {
	let catalog = Catalog::shared().expect("catalog");
	let linked =
		PersonRef { name: "Sarah Chen".to_string(), slug: Some("sarah-chen".to_string()) };
	let dangling = PersonRef { name: "Chris Olah".to_string(), slug: Some("chris-olah".to_string()) };
	let unlinked = PersonRef { name: "Plain Author".to_string(), slug: None };

	assert_eq!(catalog.resolve_person(&linked).map(|researcher| researcher.id), Some(1));
	assert!(catalog.resolve_person(&dangling).is_none());
	assert!(catalog.resolve_person(&unlinked).is_none());
}

#[test]
fn skips_dangling_collaborator_ids() {
	let mut lead = researcher(1, "lead");
	lead.collaborators = vec![2, 99];
	let catalog = Catalog::from_parts(
		vec![lead, researcher(2, "partner")],
		vec![paper(1, "Paper")],
		Vec::new(),
	)
	.expect("catalog");
	let resolved = catalog.collaborators_of(&catalog.researchers()[0]);

	assert_eq!(resolved.len(), 1);
	assert_eq!(resolved[0].slug, "partner");
}

#[test]
fn rejects_duplicate_researcher_slugs() {
	let result = Catalog::from_parts(
		vec![researcher(1, "same-slug"), researcher(2, "same-slug")],
		Vec::new(),
		Vec::new(),
	);

	assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn rejects_malformed_slugs() {
	let result = Catalog::from_parts(vec![researcher(1, "Bad Slug")], Vec::new(), Vec::new());

	assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn rejects_projects_that_end_before_they_start() {
	let result = Catalog::from_parts(
		Vec::new(),
		Vec::new(),
		vec![project("1", "backwards", "2024-06", Some("2023-01"))],
	);

	assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn derives_sorted_unique_topic_lists() {
	let catalog = Catalog::shared().expect("catalog");
	let topics = catalog.paper_topics();

	assert!(topics.windows(2).all(|pair| pair[0] < pair[1]));
	assert!(topics.contains(&"Interpretability"));
	assert!(catalog.researcher_topics().contains(&"AI Governance"));
}

#[test]
fn label_tables_fall_back_on_unknown_keys() {
	assert_eq!(labels::PROJECT_STATUSES.get("paused").label, "Paused");
	assert_eq!(labels::PAPER_SOURCES.get("lesswrong").label, "LessWrong");
	assert_eq!(labels::PAPER_SOURCES.get("mystery").label, "Academic");
	assert_eq!(labels::COMMUNITIES.get("ea").label, "EA Forum");
}

//! Fixture builders for tests across the workspace. Every builder returns a
//! fully valid record with neutral field values; tests overwrite the fields
//! they exercise.

use time::{OffsetDateTime, macros::datetime};
use uuid::Uuid;

use asc_domain::{
	Catalog, Community, Paper, PaperSource, PersonRef, Profile, Project, ProjectLinks,
	ProjectSource, ProjectStatus, Researcher, Result, YearMonth,
};

/// Frozen clock for records that carry timestamps.
pub const FIXED_NOW: OffsetDateTime = datetime!(2025-06-01 00:00:00 UTC);

pub fn person(name: &str) -> PersonRef {
	PersonRef { name: name.to_string(), slug: None }
}

pub fn researcher(id: u32, slug: &str, name: &str) -> Researcher {
	Researcher {
		id,
		slug: slug.to_string(),
		name: name.to_string(),
		avatar: "TR".to_string(),
		affiliation: "Safety Lab".to_string(),
		communities: vec![Community::Academic],
		topics: vec!["Interpretability".to_string()],
		papers: 0,
		posts: 0,
		h_index: 0,
		bio: "Works on model internals.".to_string(),
		full_bio: None,
		website: None,
		twitter: None,
		google_scholar: None,
		publications: Vec::new(),
		recent_posts: Vec::new(),
		collaborators: Vec::new(),
	}
}

pub fn paper(id: u32, title: &str) -> Paper {
	Paper {
		id,
		title: title.to_string(),
		authors: vec![person("Test Author")],
		r#abstract: "Placeholder abstract.".to_string(),
		source: PaperSource::Academic,
		year: 2024,
		venue: "arXiv".to_string(),
		topics: vec!["AI Safety".to_string()],
		citations: 0,
		karma: None,
		comments: None,
		url: None,
	}
}

pub fn project(id: &str, slug: &str, title: &str) -> Project {
	Project {
		id: id.to_string(),
		slug: slug.to_string(),
		title: title.to_string(),
		description: "Placeholder description.".to_string(),
		long_description: None,
		status: ProjectStatus::Active,
		source: ProjectSource::Academic,
		topics: vec!["Alignment".to_string()],
		leads: vec![person("Project Lead")],
		collaborators: Vec::new(),
		organizations: Vec::new(),
		start_date: YearMonth { year: 2024, month: 1 },
		end_date: None,
		funding: None,
		links: ProjectLinks::default(),
		outputs: None,
	}
}

/// Validated catalog from fixture records.
pub fn catalog(
	researchers: Vec<Researcher>,
	papers: Vec<Paper>,
	projects: Vec<Project>,
) -> Result<Catalog> {
	Catalog::from_parts(researchers, papers, projects)
}

pub fn profile(email: &str) -> Profile {
	Profile::new(Uuid::from_u128(0xA5C), Some(email.to_string()), FIXED_NOW)
}

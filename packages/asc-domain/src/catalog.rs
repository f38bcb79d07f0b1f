use std::{
	collections::{BTreeSet, HashSet},
	sync::OnceLock,
};

use regex::Regex;

use crate::{
	error::{Error, Result},
	paper::Paper,
	person::PersonRef,
	project::Project,
	researcher::Researcher,
};

const RESEARCHERS_JSON: &str = include_str!("../data/researchers.json");
const PAPERS_JSON: &str = include_str!("../data/papers.json");
const PROJECTS_JSON: &str = include_str!("../data/projects.json");

const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

static SHARED: OnceLock<Catalog> = OnceLock::new();

/// The static entity collections, loaded once and never mutated.
#[derive(Debug)]
pub struct Catalog {
	researchers: Vec<Researcher>,
	papers: Vec<Paper>,
	projects: Vec<Project>,
}

impl Catalog {
	/// Parses and validates the embedded datasets.
	pub fn load() -> Result<Self> {
		let researchers = serde_json::from_str(RESEARCHERS_JSON)
			.map_err(|err| Error::Dataset { dataset: "researchers", source: err })?;
		let papers = serde_json::from_str(PAPERS_JSON)
			.map_err(|err| Error::Dataset { dataset: "papers", source: err })?;
		let projects = serde_json::from_str(PROJECTS_JSON)
			.map_err(|err| Error::Dataset { dataset: "projects", source: err })?;

		Self::from_parts(researchers, papers, projects)
	}

	/// Builds a catalog from caller-supplied collections, applying the same
	/// validation as `load`.
	pub fn from_parts(
		researchers: Vec<Researcher>,
		papers: Vec<Paper>,
		projects: Vec<Project>,
	) -> Result<Self> {
		let catalog = Self { researchers, papers, projects };

		catalog.validate()?;

		Ok(catalog)
	}

	/// Process-wide catalog, parsed on first use.
	pub fn shared() -> Result<&'static Self> {
		if let Some(catalog) = SHARED.get() {
			return Ok(catalog);
		}

		let catalog = Self::load()?;

		Ok(SHARED.get_or_init(|| catalog))
	}

	pub fn researchers(&self) -> &[Researcher] {
		&self.researchers
	}

	pub fn papers(&self) -> &[Paper] {
		&self.papers
	}

	pub fn projects(&self) -> &[Project] {
		&self.projects
	}

	pub fn researcher_by_slug(&self, slug: &str) -> Option<&Researcher> {
		self.researchers.iter().find(|researcher| researcher.slug == slug)
	}

	pub fn researcher_by_id(&self, id: u32) -> Option<&Researcher> {
		self.researchers.iter().find(|researcher| researcher.id == id)
	}

	pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
		self.projects.iter().find(|project| project.slug == slug)
	}

	/// Resolves listed collaborator ids in order, skipping dangling ones.
	pub fn collaborators_of(&self, researcher: &Researcher) -> Vec<&Researcher> {
		researcher.collaborators.iter().filter_map(|id| self.researcher_by_id(*id)).collect()
	}

	/// Follows a person's slug into the researcher catalog. `None` when the
	/// person has no slug or the slug dangles; callers render plain text then.
	pub fn resolve_person(&self, person: &PersonRef) -> Option<&Researcher> {
		person.slug.as_deref().and_then(|slug| self.researcher_by_slug(slug))
	}

	/// Unique topic tags across all papers, sorted.
	pub fn paper_topics(&self) -> Vec<&str> {
		let topics: BTreeSet<&str> =
			self.papers.iter().flat_map(|paper| &paper.topics).map(String::as_str).collect();

		topics.into_iter().collect()
	}

	/// Unique topic tags across all researchers, sorted.
	pub fn researcher_topics(&self) -> Vec<&str> {
		let topics: BTreeSet<&str> = self
			.researchers
			.iter()
			.flat_map(|researcher| &researcher.topics)
			.map(String::as_str)
			.collect();

		topics.into_iter().collect()
	}

	fn validate(&self) -> Result<()> {
		let slug_pattern = Regex::new(SLUG_PATTERN).ok();
		let slug_ok =
			|slug: &str| slug_pattern.as_ref().map(|re| re.is_match(slug)).unwrap_or(false);

		let mut researcher_ids = HashSet::new();
		let mut researcher_slugs = HashSet::new();

		for researcher in &self.researchers {
			if researcher.name.trim().is_empty() {
				return Err(Error::Validation {
					message: format!("Researcher {} has an empty name.", researcher.id),
				});
			}
			if !slug_ok(&researcher.slug) {
				return Err(Error::Validation {
					message: format!("Researcher slug {:?} is malformed.", researcher.slug),
				});
			}
			if !researcher_ids.insert(researcher.id) {
				return Err(Error::Validation {
					message: format!("Duplicate researcher id {}.", researcher.id),
				});
			}
			if !researcher_slugs.insert(researcher.slug.as_str()) {
				return Err(Error::Validation {
					message: format!("Duplicate researcher slug {:?}.", researcher.slug),
				});
			}
		}

		let mut paper_ids = HashSet::new();

		for paper in &self.papers {
			if paper.title.trim().is_empty() {
				return Err(Error::Validation {
					message: format!("Paper {} has an empty title.", paper.id),
				});
			}
			if !paper_ids.insert(paper.id) {
				return Err(Error::Validation {
					message: format!("Duplicate paper id {}.", paper.id),
				});
			}
		}

		let mut project_ids = HashSet::new();
		let mut project_slugs = HashSet::new();

		for project in &self.projects {
			if project.title.trim().is_empty() {
				return Err(Error::Validation {
					message: format!("Project {:?} has an empty title.", project.id),
				});
			}
			if !slug_ok(&project.slug) {
				return Err(Error::Validation {
					message: format!("Project slug {:?} is malformed.", project.slug),
				});
			}
			if !project_ids.insert(project.id.as_str()) {
				return Err(Error::Validation {
					message: format!("Duplicate project id {:?}.", project.id),
				});
			}
			if !project_slugs.insert(project.slug.as_str()) {
				return Err(Error::Validation {
					message: format!("Duplicate project slug {:?}.", project.slug),
				});
			}
			if let Some(end_date) = project.end_date
				&& end_date < project.start_date
			{
				return Err(Error::Validation {
					message: format!("Project {:?} ends before it starts.", project.slug),
				});
			}
		}

		Ok(())
	}
}

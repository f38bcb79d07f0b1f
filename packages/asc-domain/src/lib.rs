//! Domain model for the AI Safety Connect directory: entity records, label
//! tables, and the embedded catalogs they load from.

mod catalog;
mod date;
mod error;
pub mod labels;
mod paper;
mod person;
mod profile;
mod project;
mod researcher;

pub use catalog::Catalog;
pub use date::{YearMonth, iso_date, rfc3339};
pub use error::{Error, Result};
pub use paper::{Paper, PaperSource};
pub use person::PersonRef;
pub use profile::{AVAILABLE_COMMUNITIES, Profile, SUGGESTED_TOPICS};
pub use project::{
	ALL_PROJECT_TOPICS, Project, ProjectLinks, ProjectOutputs, ProjectSource, ProjectStatus,
};
pub use researcher::{Community, Platform, Post, Publication, Researcher};

use serde::{Deserialize, Serialize};

use crate::{date::YearMonth, person::PersonRef};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
	Active,
	Completed,
	Paused,
	SeekingCollaborators,
}

impl ProjectStatus {
	pub fn key(self) -> &'static str {
		match self {
			Self::Active => "active",
			Self::Completed => "completed",
			Self::Paused => "paused",
			Self::SeekingCollaborators => "seeking-collaborators",
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSource {
	Academic,
	Ea,
	Independent,
	Lesswrong,
}

impl ProjectSource {
	pub fn key(self) -> &'static str {
		match self {
			Self::Academic => "academic",
			Self::Ea => "ea",
			Self::Independent => "independent",
			Self::Lesswrong => "lesswrong",
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProjectLinks {
	#[serde(default)]
	pub website: Option<String>,
	#[serde(default)]
	pub github: Option<String>,
	#[serde(default)]
	pub paper: Option<String>,
	#[serde(default)]
	pub forum: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct ProjectOutputs {
	#[serde(default)]
	pub papers: u32,
	#[serde(default)]
	pub posts: u32,
	#[serde(default)]
	pub tools: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Project {
	pub id: String,
	pub slug: String,
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub long_description: Option<String>,
	pub status: ProjectStatus,
	pub source: ProjectSource,
	pub topics: Vec<String>,
	pub leads: Vec<PersonRef>,
	#[serde(default)]
	pub collaborators: Vec<PersonRef>,
	#[serde(default)]
	pub organizations: Vec<String>,
	pub start_date: YearMonth,
	/// Must not precede `start_date`; enforced at catalog load.
	#[serde(default)]
	pub end_date: Option<YearMonth>,
	#[serde(default)]
	pub funding: Option<String>,
	#[serde(default)]
	pub links: ProjectLinks,
	#[serde(default)]
	pub outputs: Option<ProjectOutputs>,
}

impl Project {
	pub fn paper_output(&self) -> u32 {
		self.outputs.map(|outputs| outputs.papers).unwrap_or(0)
	}
}

/// Canonical topic vocabulary offered by the project directory filter.
pub const ALL_PROJECT_TOPICS: &[&str] = &[
	"Interpretability",
	"Alignment",
	"RLHF",
	"AI Governance",
	"Robustness",
	"Scalable Oversight",
	"Value Learning",
	"Agent Foundations",
	"Deception Detection",
	"Corrigibility",
	"AI Policy",
	"Forecasting",
	"Evaluation",
	"Red Teaming",
	"Constitutional AI",
];

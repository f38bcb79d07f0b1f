use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::date;

/// Communities a profile can join, in display order.
pub const AVAILABLE_COMMUNITIES: &[&str] = &["Academic", "EA Forum", "LessWrong"];

/// Topic suggestions offered by the profile editor.
pub const SUGGESTED_TOPICS: &[&str] = &[
	"AI Alignment",
	"AI Safety",
	"Machine Learning",
	"Interpretability",
	"Reinforcement Learning",
	"Natural Language Processing",
	"AI Governance",
	"AI Ethics",
	"Existential Risk",
	"Technical AI Safety",
	"AI Policy",
	"Robustness",
	"Value Learning",
	"Agent Foundations",
	"Decision Theory",
	"Game Theory",
	"Cognitive Science",
	"Rationality",
];

/// A member-managed profile. Persisted by an external store; this type only
/// carries the row shape and the edit operations the editor performs on it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Profile {
	pub id: Uuid,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub full_name: Option<String>,
	#[serde(default)]
	pub display_name: Option<String>,
	#[serde(default)]
	pub avatar_url: Option<String>,
	#[serde(default)]
	pub bio: Option<String>,
	#[serde(default)]
	pub full_bio: Option<String>,
	#[serde(default)]
	pub affiliation: Option<String>,
	#[serde(default)]
	pub position: Option<String>,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub website: Option<String>,
	#[serde(default)]
	pub twitter: Option<String>,
	#[serde(default)]
	pub github: Option<String>,
	#[serde(default)]
	pub linkedin: Option<String>,
	#[serde(default)]
	pub google_scholar: Option<String>,
	#[serde(default)]
	pub orcid: Option<String>,
	#[serde(default)]
	pub communities: Vec<String>,
	#[serde(default)]
	pub research_topics: Vec<String>,
	#[serde(default)]
	pub is_public: bool,
	#[serde(with = "date::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(with = "date::rfc3339")]
	pub updated_at: OffsetDateTime,
}

impl Profile {
	pub fn new(id: Uuid, email: Option<String>, now: OffsetDateTime) -> Self {
		Self {
			id,
			email,
			full_name: None,
			display_name: None,
			avatar_url: None,
			bio: None,
			full_bio: None,
			affiliation: None,
			position: None,
			location: None,
			website: None,
			twitter: None,
			github: None,
			linkedin: None,
			google_scholar: None,
			orcid: None,
			communities: Vec::new(),
			research_topics: Vec::new(),
			is_public: false,
			created_at: now,
			updated_at: now,
		}
	}

	/// Adds the community if absent, removes it if present.
	pub fn toggle_community(&mut self, community: &str) {
		if let Some(index) = self.communities.iter().position(|existing| existing == community) {
			self.communities.remove(index);
		} else {
			self.communities.push(community.to_string());
		}
	}

	/// Returns false for blank or duplicate topics.
	pub fn add_topic(&mut self, topic: &str) -> bool {
		let topic = topic.trim();

		if topic.is_empty() || self.research_topics.iter().any(|existing| existing == topic) {
			return false;
		}

		self.research_topics.push(topic.to_string());

		true
	}

	pub fn remove_topic(&mut self, topic: &str) {
		self.research_topics.retain(|existing| existing != topic);
	}

	/// Core fields the completion prompt asks for, in display order.
	pub fn missing_core_fields(&self) -> Vec<&'static str> {
		let mut missing = Vec::new();

		if is_blank(&self.full_name) {
			missing.push("full_name");
		}
		if is_blank(&self.bio) {
			missing.push("bio");
		}
		if is_blank(&self.affiliation) {
			missing.push("affiliation");
		}
		if self.research_topics.is_empty() {
			missing.push("research_topics");
		}

		missing
	}

	pub fn is_complete(&self) -> bool {
		self.missing_core_fields().is_empty()
	}
}

fn is_blank(value: &Option<String>) -> bool {
	value.as_deref().map(|value| value.trim().is_empty()).unwrap_or(true)
}

use serde::{Deserialize, Serialize};
use time::Date;

use crate::date;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Community {
	Academic,
	Ea,
	Lesswrong,
}

impl Community {
	pub fn key(self) -> &'static str {
		match self {
			Self::Academic => "academic",
			Self::Ea => "ea",
			Self::Lesswrong => "lesswrong",
		}
	}
}

/// Forum a post was published on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	Ea,
	Lesswrong,
}

impl Platform {
	pub fn key(self) -> &'static str {
		match self {
			Self::Ea => "ea",
			Self::Lesswrong => "lesswrong",
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Publication {
	pub id: u32,
	pub title: String,
	pub venue: String,
	pub year: u16,
	pub citations: u32,
	#[serde(default)]
	pub coauthors: Vec<String>,
	#[serde(default)]
	pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Post {
	pub id: u32,
	pub title: String,
	pub platform: Platform,
	#[serde(with = "date::iso_date")]
	pub date: Date,
	pub karma: i32,
	pub comments: u32,
	#[serde(default)]
	pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Researcher {
	pub id: u32,
	pub slug: String,
	pub name: String,
	pub avatar: String,
	pub affiliation: String,
	pub communities: Vec<Community>,
	pub topics: Vec<String>,
	pub papers: u32,
	pub posts: u32,
	pub h_index: u32,
	pub bio: String,
	#[serde(default)]
	pub full_bio: Option<String>,
	#[serde(default)]
	pub website: Option<String>,
	#[serde(default)]
	pub twitter: Option<String>,
	#[serde(default)]
	pub google_scholar: Option<String>,
	#[serde(default)]
	pub publications: Vec<Publication>,
	#[serde(default)]
	pub recent_posts: Vec<Post>,
	/// Ids of frequent collaborators; resolved through the catalog, dangling
	/// ids are skipped.
	#[serde(default)]
	pub collaborators: Vec<u32>,
}

impl Researcher {
	/// Long-form bio when available, short bio otherwise.
	pub fn display_bio(&self) -> &str {
		self.full_bio.as_deref().unwrap_or(&self.bio)
	}

	pub fn in_community(&self, key: &str) -> bool {
		self.communities.iter().any(|community| community.key() == key)
	}
}

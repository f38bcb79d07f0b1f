use serde::{Deserialize, Serialize};

use crate::person::PersonRef;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSource {
	Academic,
	Ea,
	Lesswrong,
}

impl PaperSource {
	pub fn key(self) -> &'static str {
		match self {
			Self::Academic => "academic",
			Self::Ea => "ea",
			Self::Lesswrong => "lesswrong",
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Paper {
	pub id: u32,
	pub title: String,
	pub authors: Vec<PersonRef>,
	pub r#abstract: String,
	pub source: PaperSource,
	pub year: u16,
	pub venue: String,
	pub topics: Vec<String>,
	pub citations: u32,
	/// Forum karma; only community-sourced papers carry it.
	#[serde(default)]
	pub karma: Option<i32>,
	#[serde(default)]
	pub comments: Option<u32>,
	#[serde(default)]
	pub url: Option<String>,
}

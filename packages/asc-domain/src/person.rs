use serde::{Deserialize, Serialize};

/// A person listed on a paper or project. `slug` links into the researcher
/// catalog when the person has a profile; a dangling slug renders as plain
/// text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PersonRef {
	pub name: String,
	#[serde(default)]
	pub slug: Option<String>,
}

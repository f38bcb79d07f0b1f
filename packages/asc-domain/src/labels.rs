//! Display label tables for classification keys.

/// Badge tone used by renderers; mirrors the web UI palette.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tone {
	Amber,
	Blue,
	Emerald,
	Gray,
	Orange,
	Purple,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LabelEntry {
	pub key: &'static str,
	pub label: &'static str,
	pub tone: Tone,
}

/// Key → display mapping with a fixed fallback. Unknown keys degrade to the
/// fallback entry instead of failing, so stale filter values still render.
pub struct LabelTable {
	entries: &'static [LabelEntry],
	fallback: &'static LabelEntry,
}

impl LabelTable {
	pub fn get(&self, key: &str) -> &'static LabelEntry {
		self.entries.iter().find(|entry| entry.key == key).unwrap_or(self.fallback)
	}

	pub fn entries(&self) -> &'static [LabelEntry] {
		self.entries
	}
}

const ACADEMIC_PAPER: LabelEntry =
	LabelEntry { key: "academic", label: "Academic", tone: Tone::Blue };
const PAPER_SOURCE_ENTRIES: &[LabelEntry] = &[
	ACADEMIC_PAPER,
	LabelEntry { key: "ea", label: "EA Forum", tone: Tone::Orange },
	LabelEntry { key: "lesswrong", label: "LessWrong", tone: Tone::Emerald },
];

pub static PAPER_SOURCES: LabelTable =
	LabelTable { entries: PAPER_SOURCE_ENTRIES, fallback: &ACADEMIC_PAPER };

const ACTIVE_STATUS: LabelEntry =
	LabelEntry { key: "active", label: "Active", tone: Tone::Emerald };
const PROJECT_STATUS_ENTRIES: &[LabelEntry] = &[
	ACTIVE_STATUS,
	LabelEntry { key: "completed", label: "Completed", tone: Tone::Blue },
	LabelEntry { key: "paused", label: "Paused", tone: Tone::Amber },
	LabelEntry { key: "seeking-collaborators", label: "Seeking Collaborators", tone: Tone::Purple },
];

pub static PROJECT_STATUSES: LabelTable =
	LabelTable { entries: PROJECT_STATUS_ENTRIES, fallback: &ACTIVE_STATUS };

const ACADEMIC_PROJECT: LabelEntry =
	LabelEntry { key: "academic", label: "Academic", tone: Tone::Blue };
const PROJECT_SOURCE_ENTRIES: &[LabelEntry] = &[
	ACADEMIC_PROJECT,
	LabelEntry { key: "lesswrong", label: "LessWrong", tone: Tone::Emerald },
	LabelEntry { key: "ea", label: "EA Forum", tone: Tone::Orange },
	LabelEntry { key: "independent", label: "Independent", tone: Tone::Gray },
];

pub static PROJECT_SOURCES: LabelTable =
	LabelTable { entries: PROJECT_SOURCE_ENTRIES, fallback: &ACADEMIC_PROJECT };

const ACADEMIC_COMMUNITY: LabelEntry =
	LabelEntry { key: "academic", label: "Academic", tone: Tone::Blue };
const COMMUNITY_ENTRIES: &[LabelEntry] = &[
	ACADEMIC_COMMUNITY,
	LabelEntry { key: "ea", label: "EA Forum", tone: Tone::Orange },
	LabelEntry { key: "lesswrong", label: "LessWrong", tone: Tone::Emerald },
];

pub static COMMUNITIES: LabelTable =
	LabelTable { entries: COMMUNITY_ENTRIES, fallback: &ACADEMIC_COMMUNITY };

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_keys_resolve() {
		assert_eq!(PROJECT_STATUSES.get("paused").label, "Paused");
		assert_eq!(PAPER_SOURCES.get("lesswrong").tone, Tone::Emerald);
		assert_eq!(COMMUNITIES.get("ea").label, "EA Forum");
	}

	#[test]
	fn unknown_keys_fall_back() {
		assert_eq!(PAPER_SOURCES.get("preprint").key, "academic");
		assert_eq!(PROJECT_STATUSES.get("").key, "active");
	}
}

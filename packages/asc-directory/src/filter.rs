use std::fmt::{self, Display, Formatter};

use crate::{entry::SearchDoc, text};

/// Recall-widening substitutions for broad search. This is a fixed keyword
/// heuristic, not embedding similarity. A query word also matches when any
/// of its expansions appears in the searchable text.
const SYNONYMS: &[(&str, &[&str])] = &[
	("interpretability", &["interpret"]),
	("alignment", &["align"]),
	("safety", &["safe"]),
	("llm", &["language model", "gpt"]),
	("rlhf", &["human feedback"]),
];

/// How a text query is matched against an entry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMatch {
	/// The whole query must appear as a substring of the searchable text.
	#[default]
	Exact,
	/// Any query word matches, directly or through the synonym table.
	Broad,
}

/// Whether the entry's searchable text satisfies the query. Both `query` and
/// `words` must already be canonical; `words` is the tokenization of `query`.
pub fn text_matches(mode: TextMatch, doc: &SearchDoc, query: &str, words: &[String]) -> bool {
	match mode {
		TextMatch::Exact => doc.text.contains(query),
		TextMatch::Broad => words.iter().any(|word| {
			doc.text.contains(word.as_str())
				|| expansions(word).iter().any(|sub| doc.text.contains(sub))
		}),
	}
}

fn expansions(word: &str) -> &'static [&'static str] {
	SYNONYMS.iter().find(|(key, _)| *key == word).map(|(_, subs)| *subs).unwrap_or(&[])
}

/// Topic criterion, satisfied when any of the entry's topic tags contains the
/// selected topic as a case-insensitive substring. Substring rather than
/// equality so "Alignment" also selects tags like "Value Alignment".
pub fn topic_matches(topics: &[String], topic: &str) -> bool {
	let needle = text::canonicalize(topic);

	topics.iter().any(|tag| text::canonicalize(tag).contains(&needle))
}

/// Single-value facet criterion, exact key equality. `None` selects
/// everything.
pub fn facet_matches(selected: Option<&str>, key: &str) -> bool {
	selected.map(|value| value == key).unwrap_or(true)
}

/// Year criterion, either one exact year or everything strictly before a
/// bound.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YearFilter {
	In(u16),
	Before(u16),
}

impl YearFilter {
	/// Parses a facet selection such as `"2024"` or `"before-2019"`. `None`
	/// means the selection is outside the vocabulary and must match nothing.
	pub fn parse(raw: &str) -> Option<Self> {
		if let Some(bound) = raw.strip_prefix("before-") {
			return bound.parse().ok().map(Self::Before);
		}

		raw.parse().ok().map(Self::In)
	}

	pub fn matches(self, year: u16) -> bool {
		match self {
			Self::In(target) => year == target,
			Self::Before(bound) => year < bound,
		}
	}
}

impl Display for YearFilter {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::In(year) => write!(f, "{year}"),
			Self::Before(bound) => write!(f, "Before {bound}"),
		}
	}
}

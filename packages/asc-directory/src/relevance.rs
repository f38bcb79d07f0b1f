use crate::entry::SearchDoc;

/// Keyword-overlap relevance score. Each canonical query word contributes +3
/// when it appears in the headline, +2 when it appears in any topic tag, and
/// +1 when it appears anywhere in the searchable text; the contributions
/// stack.
pub fn score(words: &[String], doc: &SearchDoc) -> u32 {
	let mut total = 0;

	for word in words {
		let word = word.as_str();

		if doc.headline.contains(word) {
			total += 3;
		}
		if doc.topics.iter().any(|topic| topic.contains(word)) {
			total += 2;
		}
		if doc.text.contains(word) {
			total += 1;
		}
	}

	total
}

use unicode_normalization::UnicodeNormalization;

/// Folds text into the canonical form every comparison in this crate runs on,
/// NFKC-normalized and lowercased.
pub fn canonicalize(text: &str) -> String {
	text.nfkc().collect::<String>().to_lowercase()
}

/// Splits a query into canonical words on whitespace.
pub fn tokenize(query: &str) -> Vec<String> {
	canonicalize(query).split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn folds_case_and_compatibility_forms() {
		assert_eq!(canonicalize("Value Alignment"), "value alignment");
		assert_eq!(canonicalize("ＲＬＨＦ"), "rlhf");
	}

	#[test]
	fn splits_on_whitespace_runs() {
		assert_eq!(tokenize("  reward   Hacking "), vec!["reward", "hacking"]);
		assert!(tokenize("   ").is_empty());
	}
}

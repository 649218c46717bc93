//! Word tokenization for set-based text comparison

use regex::Regex;
use std::collections::HashSet;

/// Splits text into a set of lowercase word-like tokens: maximal runs of
/// letters plus `+`, `#` and `.` (so "c++", "c#" and "node.js" survive as
/// single tokens). This is the unit of comparison for description and title
/// matching; substring checks elsewhere deliberately do not go through it.
pub struct Tokenizer {
    word_regex: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        let word_regex = Regex::new(r"[a-zA-Z+#.]+").expect("Invalid token regex");
        Self { word_regex }
    }

    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.word_regex
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_lowercased() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.token_set("Senior Python Engineer");

        assert!(tokens.contains("senior"));
        assert!(tokens.contains("python"));
        assert!(tokens.contains("engineer"));
    }

    #[test]
    fn test_symbol_bearing_skills_survive() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.token_set("We use C++, C# and Node.js daily");

        assert!(tokens.contains("c++"));
        assert!(tokens.contains("c#"));
        assert!(tokens.contains("node.js"));
    }

    #[test]
    fn test_digits_and_punctuation_split_tokens() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.token_set("python3 kube/ctl");

        assert!(tokens.contains("python"));
        assert!(tokens.contains("kube"));
        assert!(tokens.contains("ctl"));
        assert!(!tokens.contains("python3"));
    }

    #[test]
    fn test_empty_input_is_empty_set() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.token_set("").is_empty());
    }
}

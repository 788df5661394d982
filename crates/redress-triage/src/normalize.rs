// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complaint text normalization: lowercasing, punctuation stripping,
//! stopword removal, and light suffix stemming.
//!
//! `normalize` is a pure function. The same `stem` rules are applied to
//! the classifier vocabularies and the sentiment lexicon at construction
//! time, so token lookups always compare stem-to-stem.

use redress_core::RedressError;

/// English stopwords dropped during normalization.
///
/// Kept deliberately small: only words that carry no routing or sentiment
/// signal. Domain words ("not", "no", "very") that feed the sentiment and
/// urgency heuristics are NOT stopwords.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "than", "that", "this", "these",
    "those", "is", "are", "was", "were", "be", "been", "being", "am", "it", "its", "i",
    "me", "my", "we", "our", "you", "your", "he", "she", "his", "her", "they", "them",
    "their", "of", "in", "on", "at", "to", "from", "by", "for", "with", "about", "as",
    "into", "through", "during", "before", "after", "out", "off", "over", "under", "again",
    "there", "here", "when", "where", "why", "how", "all", "any", "both", "each", "such",
    "some", "can", "will", "just", "should", "would", "could", "also", "has", "have",
    "had", "do", "does", "did", "so", "because", "while", "what", "which", "who", "whom",
];

/// Minimum token length kept after normalization. Shorter fragments are
/// almost always noise ("ok", "hi", stray letters from punctuation splits).
const MIN_TOKEN_LEN: usize = 3;

/// Normalize raw complaint text into a token sequence.
///
/// Lowercases, replaces non-alphanumeric characters with spaces, splits on
/// whitespace, drops stopwords and tokens shorter than three characters,
/// and stems what remains. Deterministic: the same input always yields the
/// same token sequence.
///
/// Fails with `InvalidInput` when the text is empty after trimming.
pub fn normalize(raw: &str) -> Result<Vec<String>, RedressError> {
    if raw.trim().is_empty() {
        return Err(RedressError::InvalidInput(
            "complaint text must not be empty".to_string(),
        ));
    }

    let lowered = raw.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let tokens: Vec<String> = cleaned
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(t))
        .map(stem)
        .collect();

    Ok(tokens)
}

/// Light deterministic suffix stemmer.
///
/// Handles possessives, common plurals, and -ing/-ed participles. This is
/// intentionally rule-light: vocabularies and tokens pass through the same
/// function, so internal consistency is what matters, not linguistic
/// completeness.
pub fn stem(word: &str) -> String {
    let mut w = word.strip_suffix("'s").unwrap_or(word).to_string();

    if let Some(base) = w.strip_suffix("sses") {
        w = format!("{base}ss");
    } else if w.len() > 4 && w.ends_with("ies") {
        w = format!("{}y", &w[..w.len() - 3]);
    } else if w.len() > 3 && w.ends_with('s') && !w.ends_with("ss") && !w.ends_with("us") {
        w.truncate(w.len() - 1);
    }

    if w.len() > 5 && w.ends_with("ing") {
        w.truncate(w.len() - 3);
    } else if w.len() > 4 && w.ends_with("ed") {
        w.truncate(w.len() - 2);
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_invalid_input() {
        assert!(matches!(
            normalize(""),
            Err(RedressError::InvalidInput(_))
        ));
        assert!(matches!(
            normalize("   \n\t "),
            Err(RedressError::InvalidInput(_))
        ));
    }

    #[test]
    fn normalize_is_deterministic() {
        let text = "The WiFi in the hostel is BROKEN!!";
        let a = normalize(text).unwrap();
        let b = normalize(text).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn normalize_lowercases_and_strips_punctuation() {
        let tokens = normalize("Printer NOT working -- paper jam?!").unwrap();
        assert!(tokens.contains(&"printer".to_string()));
        assert!(tokens.contains(&"work".to_string()));
        assert!(tokens.contains(&"jam".to_string()));
    }

    #[test]
    fn stopwords_and_short_tokens_are_dropped() {
        let tokens = normalize("it is a PC in the lab").unwrap();
        assert!(!tokens.iter().any(|t| t == "the" || t == "is" || t == "it"));
        // "PC" is below the length floor
        assert!(!tokens.iter().any(|t| t == "pc"));
        assert!(tokens.contains(&"lab".to_string()));
    }

    #[test]
    fn stem_handles_plurals_and_participles() {
        assert_eq!(stem("connections"), "connection");
        assert_eq!(stem("libraries"), "library");
        assert_eq!(stem("classes"), "class");
        assert_eq!(stem("working"), "work");
        assert_eq!(stem("failed"), "fail");
        assert_eq!(stem("warden's"), "warden");
        // Short words and -ss/-us endings are left alone
        assert_eq!(stem("bus"), "bus");
        assert_eq!(stem("mess"), "mess");
        assert_eq!(stem("gas"), "gas");
    }

    #[test]
    fn slow_lab_complaint_tokens_survive() {
        let tokens = normalize(
            "Internet connection is very slow in the computer lab, unable to download software",
        )
        .unwrap();
        for expected in ["internet", "connection", "slow", "computer", "lab", "unable",
            "download", "software"]
        {
            assert!(
                tokens.contains(&expected.to_string()),
                "missing token {expected} in {tokens:?}"
            );
        }
    }
}

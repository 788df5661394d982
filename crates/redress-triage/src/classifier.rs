// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-overlap complaint classifier.
//!
//! Maps normalized tokens to one department category by scoring overlap
//! against per-category vocabularies. Zero-cost heuristic rules: no model
//! call, no network, no latency. Ties break by the fixed `Category::ALL`
//! order so classification is reproducible across runs.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use redress_core::{Category, RedressError};

use crate::normalize::stem;
use redress_config::model::TriageConfig;

/// Built-in per-category vocabularies.
///
/// `Other` carries no vocabulary: it is the fallback for texts that match
/// nothing or match too weakly, never a scored contender.
const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::ItIssues,
        &[
            "internet", "wifi", "network", "computer", "laptop", "lab", "software",
            "hardware", "printer", "projector", "system", "server", "website", "portal",
            "login", "password", "slow", "connection", "download", "upload", "screen",
            "mouse", "keyboard",
        ],
    ),
    (
        Category::HostelManagement,
        &[
            "hostel", "room", "accommodation", "mess", "food", "canteen", "warden",
            "cleanliness", "maintenance", "water", "electricity", "bed", "mattress",
            "bathroom", "toilet", "roommate", "noise", "hygiene", "laundry", "dining",
        ],
    ),
    (
        Category::Academics,
        &[
            "exam", "test", "marks", "grades", "faculty", "professor", "teacher", "course",
            "class", "lecture", "syllabus", "schedule", "timetable", "attendance",
            "assignment", "project", "curriculum", "subject", "semester", "academic",
            "study",
        ],
    ),
    (
        Category::Administration,
        &[
            "certificate", "document", "bonafide", "admission", "registration", "fee",
            "payment", "scholarship", "transcript", "verification", "office",
            "application", "form", "approval", "process", "department", "staff",
            "administration", "official",
        ],
    ),
    (
        Category::Library,
        &[
            "library", "book", "reference", "journal", "librarian", "borrow", "return",
            "fine", "catalog", "database", "ebook", "photocopy", "quiet", "membership",
        ],
    ),
    (
        Category::SportsRecreation,
        &[
            "sports", "playground", "field", "court", "gym", "fitness", "basketball",
            "football", "cricket", "volleyball", "equipment", "recreation", "athletic",
            "tournament", "game", "exercise", "coach", "training", "facility",
        ],
    ),
];

/// Confidence assigned when no keyword matches at all and the text falls
/// back to `Other`. Matches the behavior of treating "no signal" as a
/// coin-flip-grade label rather than a confident one.
const NO_MATCH_CONFIDENCE: f64 = 0.5;

/// Hard cap on reported confidence. Even a perfect single-category match
/// is keyword evidence, not certainty.
const CONFIDENCE_CAP: f64 = 0.99;

/// Result of classifying a complaint's tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The chosen routing category.
    pub category: Category,
    /// Confidence in the classification (0.0-1.0).
    pub confidence: f64,
}

/// Keyword-overlap classifier over the closed category set.
#[derive(Debug)]
pub struct Classifier {
    /// Stemmed vocabulary per category, in `Category::ALL` order.
    vocabularies: Vec<(Category, HashSet<String>)>,
    /// Confidence below which the label falls back to `Other`.
    fallback_threshold: f64,
}

impl Classifier {
    /// Build a classifier from configuration.
    ///
    /// Uses the built-in vocabularies unless `triage.keyword_lexicon_path`
    /// names a TOML lexicon file. Fails with `ClassificationUnavailable`
    /// only if that resource cannot be loaded; low confidence at classify
    /// time is a normal outcome, not an error.
    pub fn new(config: &TriageConfig) -> Result<Self, RedressError> {
        match &config.keyword_lexicon_path {
            Some(path) => {
                Self::from_lexicon_file(Path::new(path), config.fallback_confidence_threshold)
            }
            None => Ok(Self::from_builtin(config.fallback_confidence_threshold)),
        }
    }

    /// Build a classifier with the built-in vocabularies.
    pub fn from_builtin(fallback_threshold: f64) -> Self {
        let vocabularies = KEYWORDS
            .iter()
            .map(|(category, words)| {
                let set = words.iter().map(|w| stem(w)).collect();
                (*category, set)
            })
            .collect();
        Self {
            vocabularies,
            fallback_threshold,
        }
    }

    /// Build a classifier from an operator-supplied TOML lexicon.
    ///
    /// Format: a `[categories]` table mapping category display names to
    /// keyword arrays. Unknown category names, unreadable files, and empty
    /// lexicons are all `ClassificationUnavailable`.
    pub fn from_lexicon_file(path: &Path, fallback_threshold: f64) -> Result<Self, RedressError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RedressError::ClassificationUnavailable(format!(
                "cannot read lexicon file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_lexicon_str(&content, fallback_threshold).map_err(|e| match e {
            RedressError::ClassificationUnavailable(msg) => {
                RedressError::ClassificationUnavailable(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parse a TOML lexicon string. See [`Classifier::from_lexicon_file`].
    pub fn from_lexicon_str(
        content: &str,
        fallback_threshold: f64,
    ) -> Result<Self, RedressError> {
        #[derive(serde::Deserialize)]
        struct LexiconFile {
            categories: HashMap<String, Vec<String>>,
        }

        let parsed: LexiconFile = toml::from_str(content).map_err(|e| {
            RedressError::ClassificationUnavailable(format!("invalid lexicon TOML: {e}"))
        })?;

        let mut by_category: HashMap<Category, HashSet<String>> = HashMap::new();
        for (name, words) in parsed.categories {
            let category: Category = name.parse().map_err(|_| {
                RedressError::ClassificationUnavailable(format!(
                    "unknown category `{name}` in lexicon"
                ))
            })?;
            by_category
                .entry(category)
                .or_default()
                .extend(words.iter().map(|w| stem(&w.to_lowercase())));
        }

        if by_category.values().all(|set| set.is_empty()) {
            return Err(RedressError::ClassificationUnavailable(
                "lexicon defines no keywords".to_string(),
            ));
        }

        // Keep Category::ALL order for deterministic tie-breaking.
        let vocabularies = Category::ALL
            .iter()
            .filter(|c| **c != Category::Other)
            .map(|c| (*c, by_category.remove(c).unwrap_or_default()))
            .collect();

        Ok(Self {
            vocabularies,
            fallback_threshold,
        })
    }

    /// Classify a token sequence into a category with a confidence score.
    ///
    /// Confidence is the winning category's share of all keyword matches,
    /// capped at 0.99. Below the fallback threshold the label is replaced
    /// with `Other` (the confidence is reported unchanged so callers can
    /// see how weak the signal was).
    pub fn classify(&self, tokens: &[String]) -> Classification {
        let scores = self.scores(tokens);

        let total: usize = scores.iter().map(|(_, s)| s).sum();
        let mut best: Option<(Category, usize)> = None;
        for (category, score) in &scores {
            // Strictly greater: earlier categories win ties.
            if best.is_none_or(|(_, s)| *score > s) && *score > 0 {
                best = Some((*category, *score));
            }
        }

        let Some((category, score)) = best else {
            return Classification {
                category: Category::Other,
                confidence: NO_MATCH_CONFIDENCE,
            };
        };

        let confidence = (score as f64 / total as f64).min(CONFIDENCE_CAP);

        if confidence < self.fallback_threshold {
            return Classification {
                category: Category::Other,
                confidence,
            };
        }

        Classification {
            category,
            confidence,
        }
    }

    /// Top-N category suggestions with their match shares.
    ///
    /// Intended for intake UIs that show the submitter likely routings.
    pub fn suggestions(&self, tokens: &[String], top_n: usize) -> Vec<(Category, f64)> {
        let scores = self.scores(tokens);
        let total: usize = scores.iter().map(|(_, s)| s).sum();

        let mut ranked = scores;
        // Stable sort preserves Category::ALL order among equals.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(top_n)
            .map(|(category, score)| {
                let share = if total > 0 {
                    score as f64 / total as f64
                } else {
                    0.0
                };
                (category, share)
            })
            .collect()
    }

    /// Keyword match count per category, in vocabulary order.
    fn scores(&self, tokens: &[String]) -> Vec<(Category, usize)> {
        self.vocabularies
            .iter()
            .map(|(category, set)| {
                let score = tokens.iter().filter(|t| set.contains(*t)).count();
                (*category, score)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn classifier() -> Classifier {
        Classifier::from_builtin(0.35)
    }

    #[test]
    fn classifies_it_complaint() {
        let tokens = normalize(
            "Internet connection is very slow in the computer lab, unable to download software",
        )
        .unwrap();
        let result = classifier().classify(&tokens);
        assert_eq!(result.category, Category::ItIssues);
        assert!(result.confidence > 0.35);
    }

    #[test]
    fn classifies_hostel_complaint() {
        let tokens =
            normalize("No hot water in the hostel bathroom and the mess food is terrible").unwrap();
        let result = classifier().classify(&tokens);
        assert_eq!(result.category, Category::HostelManagement);
    }

    #[test]
    fn classifies_library_complaint() {
        let tokens = normalize("The library catalog shows the book available but the librarian cannot find it")
            .unwrap();
        let result = classifier().classify(&tokens);
        assert_eq!(result.category, Category::Library);
    }

    #[test]
    fn no_keywords_falls_back_to_other() {
        let tokens = normalize("something vague happened somewhere yesterday").unwrap();
        let result = classifier().classify(&tokens);
        assert_eq!(result.category, Category::Other);
        assert!((result.confidence - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weak_signal_falls_back_to_other() {
        // One IT keyword drowned in cross-category matches: confidence
        // under the threshold must not produce an unreliable label.
        let c = Classifier::from_builtin(0.9);
        let tokens =
            normalize("The exam hall projector and the hostel water supply and the library book")
                .unwrap();
        let result = c.classify(&tokens);
        assert_eq!(result.category, Category::Other);
        assert!(result.confidence < 0.9);
    }

    #[test]
    fn tie_breaks_by_fixed_category_order() {
        // "slow" is IT vocabulary, "water" is hostel vocabulary: one match
        // each, and IT Issues precedes Hostel Management in Category::ALL.
        let c = Classifier::from_builtin(0.0);
        let tokens = vec!["slow".to_string(), "water".to_string()];
        let result = c.classify(&tokens);
        assert_eq!(result.category, Category::ItIssues);
    }

    #[test]
    fn classify_is_deterministic() {
        let tokens = normalize("wifi broken in hostel room").unwrap();
        let c = classifier();
        let a = c.classify(&tokens);
        let b = c.classify(&tokens);
        assert_eq!(a, b);
    }

    #[test]
    fn suggestions_rank_by_match_share() {
        let tokens = normalize("printer broken in the computer lab near the library").unwrap();
        let suggestions = classifier().suggestions(&tokens, 3);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].0, Category::ItIssues);
        assert!(suggestions[0].1 >= suggestions[1].1);
        assert!(suggestions[1].1 >= suggestions[2].1);
    }

    #[test]
    fn lexicon_file_overrides_builtin() {
        let toml = r#"
[categories]
"IT Issues" = ["frobnicator"]
"Library" = ["tome"]
"#;
        let c = Classifier::from_lexicon_str(toml, 0.35).unwrap();
        let result = c.classify(&["frobnicator".to_string()]);
        assert_eq!(result.category, Category::ItIssues);
        // Builtin vocabulary no longer applies
        let result = c.classify(&["wifi".to_string()]);
        assert_eq!(result.category, Category::Other);
    }

    #[test]
    fn unknown_lexicon_category_is_unavailable() {
        let toml = r#"
[categories]
"Parking" = ["car"]
"#;
        let err = Classifier::from_lexicon_str(toml, 0.35).unwrap_err();
        assert!(matches!(err, RedressError::ClassificationUnavailable(_)));
    }

    #[test]
    fn empty_lexicon_is_unavailable() {
        let toml = r#"
[categories]
"IT Issues" = []
"#;
        let err = Classifier::from_lexicon_str(toml, 0.35).unwrap_err();
        assert!(matches!(err, RedressError::ClassificationUnavailable(_)));
    }

    #[test]
    fn missing_lexicon_file_is_unavailable() {
        let err = Classifier::from_lexicon_file(Path::new("/nonexistent/lexicon.toml"), 0.35)
            .unwrap_err();
        assert!(matches!(err, RedressError::ClassificationUnavailable(_)));
    }
}

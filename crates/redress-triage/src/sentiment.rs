// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexicon-based sentiment scoring for complaint urgency.
//!
//! Produces a signed score in [-1.0, 1.0]: negative captures
//! distress/urgency, positive a neutral-to-appreciative tone. The score is
//! `raw / (|raw| + damping)` where `raw` sums the valences of matched
//! tokens. That curve is strictly increasing in `raw`, which gives the
//! monotonicity contract: adding a negative-valence token can only lower
//! the score, never raise it.

use std::collections::HashMap;

use redress_config::model::TriageConfig;

use crate::normalize::stem;

/// Valence lexicon entries, raw word form. Stemmed at construction so
/// lookups agree with normalizer output.
///
/// Negative weights mark urgency/distress vocabulary; the strongest
/// entries are safety words. Mildly negative problem-statement words
/// ("issue", "problem") keep routine complaints slightly below neutral.
const VALENCE: &[(&str, f64)] = &[
    // Urgency and severity
    ("urgent", -0.6),
    ("immediately", -0.5),
    ("asap", -0.5),
    ("emergency", -0.9),
    ("critical", -0.8),
    ("serious", -0.6),
    ("severe", -0.7),
    ("dangerous", -0.9),
    ("unsafe", -0.9),
    // Breakage and failure
    ("broken", -0.7),
    ("failed", -0.6),
    ("unable", -0.6),
    ("cannot", -0.5),
    ("stuck", -0.5),
    ("blocked", -0.5),
    ("malfunction", -0.5),
    ("error", -0.4),
    ("fault", -0.4),
    ("defect", -0.4),
    ("leaking", -0.5),
    ("slow", -0.4),
    ("dirty", -0.5),
    // Tone
    ("terrible", -0.9),
    ("worst", -0.9),
    ("awful", -0.8),
    ("horrible", -0.8),
    ("angry", -0.7),
    ("frustrated", -0.6),
    ("disappointed", -0.5),
    ("poor", -0.4),
    ("bad", -0.4),
    ("delay", -0.4),
    ("waiting", -0.3),
    // Problem statements
    ("issue", -0.3),
    ("problem", -0.3),
    ("trouble", -0.4),
    ("difficulty", -0.3),
    ("concern", -0.2),
    ("complaint", -0.2),
    // Positive tone
    ("good", 0.5),
    ("great", 0.7),
    ("excellent", 0.8),
    ("thanks", 0.4),
    ("thank", 0.4),
    ("appreciate", 0.5),
    ("helpful", 0.5),
    ("satisfied", 0.6),
    ("happy", 0.6),
    ("fine", 0.3),
    ("well", 0.3),
    ("smooth", 0.4),
];

/// Lexicon-based sentiment scorer. Pure and deterministic.
#[derive(Debug)]
pub struct SentimentScorer {
    valence: HashMap<String, f64>,
    damping: f64,
}

impl SentimentScorer {
    /// Build a scorer with the built-in valence lexicon and the configured
    /// damping constant.
    pub fn new(config: &TriageConfig) -> Self {
        Self::with_damping(config.sentiment_damping)
    }

    /// Build a scorer with an explicit damping constant.
    pub fn with_damping(damping: f64) -> Self {
        let valence = VALENCE
            .iter()
            .map(|(word, weight)| (stem(word), *weight))
            .collect();
        Self { valence, damping }
    }

    /// Score a token sequence. Returns a value in [-1.0, 1.0].
    ///
    /// Each matched occurrence contributes its valence to the raw sum;
    /// unmatched tokens contribute nothing. A text with no lexicon hits
    /// scores exactly 0.0.
    pub fn score(&self, tokens: &[String]) -> f64 {
        let raw: f64 = tokens
            .iter()
            .filter_map(|t| self.valence.get(t))
            .sum();

        if raw == 0.0 {
            return 0.0;
        }

        raw / (raw.abs() + self.damping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use proptest::prelude::*;

    fn scorer() -> SentimentScorer {
        SentimentScorer::with_damping(2.0)
    }

    #[test]
    fn neutral_text_scores_zero() {
        let tokens = normalize("the printer on the second floor").unwrap();
        assert_eq!(scorer().score(&tokens), 0.0);
    }

    #[test]
    fn distressed_text_scores_negative() {
        let tokens =
            normalize("This is urgent, the bathroom is flooded and dangerous").unwrap();
        assert!(scorer().score(&tokens) < 0.0);
    }

    #[test]
    fn appreciative_text_scores_positive() {
        let tokens = normalize("Thanks, the new reading room is excellent and helpful").unwrap();
        assert!(scorer().score(&tokens) > 0.0);
    }

    #[test]
    fn score_stays_in_range() {
        let mut tokens = Vec::new();
        for _ in 0..100 {
            tokens.push("terrible".to_string());
        }
        let score = scorer().score(&tokens);
        assert!((-1.0..=1.0).contains(&score));
        assert!(score < -0.9);
    }

    #[test]
    fn adding_negative_token_never_raises_score() {
        let base = normalize("the wifi is slow and the portal login failed").unwrap();
        let base_score = scorer().score(&base);

        let mut worse = base.clone();
        worse.push(stem("terrible"));
        let worse_score = scorer().score(&worse);

        assert!(worse_score < base_score);
    }

    #[test]
    fn slow_lab_complaint_is_high_urgency_band() {
        let tokens = normalize(
            "Internet connection is very slow in the computer lab, unable to download software",
        )
        .unwrap();
        let score = scorer().score(&tokens);
        // "slow" and "unable" put this at the High-priority sentiment band.
        assert!(score <= -0.3, "expected strongly negative, got {score}");
    }

    proptest! {
        /// Monotonicity: appending any negative-valence lexicon word to any
        /// token sequence never raises the score.
        #[test]
        fn negative_append_is_monotone(
            tokens in proptest::collection::vec("[a-z]{3,10}", 0..20),
            pick in 0usize..10,
        ) {
            let negatives = ["urgent", "broken", "terrible", "slow", "unable",
                "emergency", "awful", "problem", "dirty", "stuck"];
            let s = scorer();
            let before = s.score(&tokens);
            let mut extended = tokens.clone();
            extended.push(stem(negatives[pick]));
            let after = s.score(&extended);
            prop_assert!(after <= before);
        }

        /// Purity: scoring the same tokens twice yields the same value.
        #[test]
        fn score_is_pure(tokens in proptest::collection::vec("[a-z]{3,10}", 0..30)) {
            let s = scorer();
            prop_assert_eq!(s.score(&tokens), s.score(&tokens));
        }
    }
}

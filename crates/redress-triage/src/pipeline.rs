// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The full triage pipeline: normalize, classify, score, estimate.
//!
//! Stages are pure computations over the input text; the pipeline holds
//! only immutable lexicons and tables built once at construction, so it
//! can be shared freely across concurrent submissions.

use redress_core::{Category, Priority, RedressError};
use redress_config::model::{EstimatorConfig, TriageConfig};
use tracing::debug;

use crate::classifier::Classifier;
use crate::estimator::Estimator;
use crate::normalize::normalize;
use crate::sentiment::SentimentScorer;

/// Structured routing decision for one complaint text.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageOutcome {
    pub category: Category,
    pub confidence: f64,
    /// Signed sentiment in [-1.0, 1.0].
    pub sentiment: f64,
    pub priority: Priority,
    /// Predicted resolution time in hours.
    pub predicted_hours: u32,
}

/// Combined triage pipeline.
#[derive(Debug)]
pub struct TriagePipeline {
    classifier: Classifier,
    scorer: SentimentScorer,
    estimator: Estimator,
}

impl TriagePipeline {
    /// Build the pipeline from configuration.
    ///
    /// Lexicon loading happens here, once; a failure is
    /// `ClassificationUnavailable` and nothing is partially constructed.
    pub fn new(triage: &TriageConfig, estimator: EstimatorConfig) -> Result<Self, RedressError> {
        Ok(Self {
            classifier: Classifier::new(triage)?,
            scorer: SentimentScorer::new(triage),
            estimator: Estimator::new(triage, estimator),
        })
    }

    /// Run the full pipeline on raw complaint text.
    pub fn run(&self, raw_text: &str) -> Result<TriageOutcome, RedressError> {
        let tokens = normalize(raw_text)?;

        let classification = self.classifier.classify(&tokens);
        let sentiment = self.scorer.score(&tokens);
        let estimate =
            self.estimator
                .estimate(classification.category, classification.confidence, sentiment);

        debug!(
            category = %classification.category,
            confidence = classification.confidence,
            sentiment,
            priority = %estimate.priority,
            predicted_hours = estimate.predicted_hours,
            "complaint triaged"
        );

        Ok(TriageOutcome {
            category: classification.category,
            confidence: classification.confidence,
            sentiment,
            priority: estimate.priority,
            predicted_hours: estimate.predicted_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redress_config::model::RedressConfig;

    fn pipeline() -> TriagePipeline {
        let config = RedressConfig::default();
        TriagePipeline::new(&config.triage, config.estimator).unwrap()
    }

    #[test]
    fn it_complaint_routes_to_it_with_urgency() {
        let outcome = pipeline()
            .run("Internet connection is very slow in the computer lab, unable to download software")
            .unwrap();
        assert_eq!(outcome.category, Category::ItIssues);
        assert!(outcome.sentiment < 0.0);
        assert!(outcome.priority >= Priority::Medium);
    }

    #[test]
    fn empty_text_fails_before_any_stage() {
        let err = pipeline().run("   ").unwrap_err();
        assert!(matches!(err, RedressError::InvalidInput(_)));
    }

    #[test]
    fn pipeline_is_deterministic() {
        let p = pipeline();
        let text = "The mess food made several students sick, this is serious";
        assert_eq!(p.run(text).unwrap(), p.run(text).unwrap());
    }

    #[test]
    fn unmatched_text_routes_to_other() {
        let outcome = pipeline().run("general remark nothing specific").unwrap();
        assert_eq!(outcome.category, Category::Other);
        assert_eq!(outcome.predicted_hours, 168);
    }

    #[test]
    fn bad_lexicon_path_fails_construction() {
        let mut config = RedressConfig::default();
        config.triage.keyword_lexicon_path = Some("/no/such/lexicon.toml".to_string());
        let err = TriagePipeline::new(&config.triage, config.estimator).unwrap_err();
        assert!(matches!(err, RedressError::ClassificationUnavailable(_)));
    }
}

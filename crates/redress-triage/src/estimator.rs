// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Priority tier and resolution-time estimation.
//!
//! A pure function of (category, confidence, sentiment) and the configured
//! tables: no hidden state, no randomness. Identical triage inputs always
//! yield identical output, which regression tests and fairness audits
//! depend on.

use redress_core::{Category, Priority};
use redress_config::model::{EstimatorConfig, TriageConfig};

/// Result of estimating a complaint's priority and resolution time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub priority: Priority,
    /// Predicted resolution time in whole hours, at least the configured floor.
    pub predicted_hours: u32,
}

/// Priority and ETA estimator driven by explicit configuration tables.
#[derive(Debug)]
pub struct Estimator {
    high_priority_sentiment: f64,
    low_priority_sentiment: f64,
    low_priority_confidence: f64,
    config: EstimatorConfig,
}

impl Estimator {
    pub fn new(triage: &TriageConfig, config: EstimatorConfig) -> Self {
        Self {
            high_priority_sentiment: triage.high_priority_sentiment,
            low_priority_sentiment: triage.low_priority_sentiment,
            low_priority_confidence: triage.low_priority_confidence,
            config,
        }
    }

    /// Estimate priority and resolution time for a triaged complaint.
    ///
    /// Priority rule:
    /// - High when sentiment is at or below the high-priority band, or the
    ///   category is in the configured critical set
    /// - Low when sentiment is at or above the low-priority band AND the
    ///   classifier was confident
    /// - Medium otherwise
    ///
    /// The predicted time starts from the category's base hours, scaled
    /// down for High priority and up for Low, floored at `minimum_hours`.
    pub fn estimate(&self, category: Category, confidence: f64, sentiment: f64) -> Estimate {
        let priority = if sentiment <= self.high_priority_sentiment
            || self.config.critical_categories.contains(&category)
        {
            Priority::High
        } else if sentiment >= self.low_priority_sentiment
            && confidence >= self.low_priority_confidence
        {
            Priority::Low
        } else {
            Priority::Medium
        };

        let base = self.config.base_hours.for_category(category);
        let multiplier = match priority {
            Priority::High => self.config.high_multiplier,
            Priority::Medium => 1.0,
            Priority::Low => self.config.low_multiplier,
        };

        let scaled = (base as f64 * multiplier).round() as u32;
        let predicted_hours = scaled.max(self.config.minimum_hours);

        Estimate {
            priority,
            predicted_hours,
        }
    }
}

/// Human-readable banding for a predicted resolution time.
///
/// Shown on intake confirmations ("your complaint should be resolved
/// within...").
pub fn format_eta(hours: u32) -> String {
    if hours < 24 {
        format!("Within {hours} hours")
    } else if hours < 48 {
        "1-2 days".to_string()
    } else if hours < 72 {
        "2-3 days".to_string()
    } else if hours < 120 {
        "3-5 days".to_string()
    } else {
        format!("{} days", hours / 24)
    }
}

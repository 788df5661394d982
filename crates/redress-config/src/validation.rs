// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: threshold ranges, multiplier signs, and table completeness.

use redress_core::Category;

use crate::diagnostic::ConfigError;
use crate::model::RedressConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &RedressConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    let threshold = config.triage.fallback_confidence_threshold;
    if !(0.0..=1.0).contains(&threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "triage.fallback_confidence_threshold must be in [0.0, 1.0], got {threshold}"
            ),
        });
    }

    let high = config.triage.high_priority_sentiment;
    if !(-1.0..=0.0).contains(&high) {
        errors.push(ConfigError::Validation {
            message: format!(
                "triage.high_priority_sentiment must be in [-1.0, 0.0], got {high}"
            ),
        });
    }

    let low = config.triage.low_priority_sentiment;
    if !(-1.0..=1.0).contains(&low) {
        errors.push(ConfigError::Validation {
            message: format!("triage.low_priority_sentiment must be in [-1.0, 1.0], got {low}"),
        });
    }

    if low <= high {
        errors.push(ConfigError::Validation {
            message: format!(
                "triage.low_priority_sentiment ({low}) must be greater than \
                 triage.high_priority_sentiment ({high})"
            ),
        });
    }

    let low_conf = config.triage.low_priority_confidence;
    if !(0.0..=1.0).contains(&low_conf) {
        errors.push(ConfigError::Validation {
            message: format!(
                "triage.low_priority_confidence must be in [0.0, 1.0], got {low_conf}"
            ),
        });
    }

    if config.triage.sentiment_damping <= 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "triage.sentiment_damping must be positive, got {}",
                config.triage.sentiment_damping
            ),
        });
    }

    if config.estimator.high_multiplier <= 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "estimator.high_multiplier must be positive, got {}",
                config.estimator.high_multiplier
            ),
        });
    }

    if config.estimator.low_multiplier <= 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "estimator.low_multiplier must be positive, got {}",
                config.estimator.low_multiplier
            ),
        });
    }

    if config.estimator.minimum_hours < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "estimator.minimum_hours must be at least 1, got {}",
                config.estimator.minimum_hours
            ),
        });
    }

    for category in Category::ALL {
        if config.estimator.base_hours.for_category(category) < 1 {
            errors.push(ConfigError::Validation {
                message: format!(
                    "estimator.base_hours entry for `{category}` must be at least 1"
                ),
            });
        }
    }

    // Duplicate critical categories are almost certainly a config mistake
    let mut seen = std::collections::HashSet::new();
    for category in &config.estimator.critical_categories {
        if !seen.insert(category) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "duplicate category `{category}` in estimator.critical_categories"
                ),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = RedressConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = RedressConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("database_path"))
        ));
    }

    #[test]
    fn out_of_range_threshold_fails_validation() {
        let mut config = RedressConfig::default();
        config.triage.fallback_confidence_threshold = 1.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("fallback_confidence_threshold"))
        ));
    }

    #[test]
    fn inverted_sentiment_bands_fail_validation() {
        let mut config = RedressConfig::default();
        config.triage.high_priority_sentiment = -0.1;
        config.triage.low_priority_sentiment = -0.2;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("must be greater than"))
        ));
    }

    #[test]
    fn zero_base_hours_fails_validation() {
        let mut config = RedressConfig::default();
        config.estimator.base_hours.library = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("Library"))
        ));
    }

    #[test]
    fn duplicate_critical_categories_fail_validation() {
        let mut config = RedressConfig::default();
        config.estimator.critical_categories =
            vec![Category::HostelManagement, Category::HostelManagement];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("duplicate category"))
        ));
    }

    #[test]
    fn negative_multiplier_fails_validation() {
        let mut config = RedressConfig::default();
        config.estimator.high_multiplier = -0.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("high_multiplier"))
        ));
    }
}

// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Redress triage engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages. The triage
//! and estimator tables live here rather than as hidden globals so tests
//! can run the pipeline against alternate policies.

use redress_core::Category;
use serde::{Deserialize, Serialize};

/// Top-level Redress configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RedressConfig {
    /// Engine identity and logging settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Triage pipeline thresholds.
    #[serde(default)]
    pub triage: TriageConfig,

    /// Priority and resolution-time estimation tables.
    #[serde(default)]
    pub estimator: EstimatorConfig,

    /// Ticket lifecycle policy.
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
}

/// Engine identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Display name of the engine instance.
    #[serde(default = "default_engine_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: default_engine_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_engine_name() -> String {
    "redress".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL journal mode.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    "redress.db".to_string()
}

fn default_wal_mode() -> bool {
    true
}

/// Triage pipeline thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TriageConfig {
    /// Classifier confidence below which the category falls back to `Other`.
    #[serde(default = "default_fallback_confidence")]
    pub fallback_confidence_threshold: f64,

    /// Sentiment at or below this value forces High priority.
    #[serde(default = "default_high_priority_sentiment")]
    pub high_priority_sentiment: f64,

    /// Sentiment at or above this value (with high confidence) allows Low priority.
    #[serde(default = "default_low_priority_sentiment")]
    pub low_priority_sentiment: f64,

    /// Classifier confidence at or above which a calm ticket may be Low priority.
    #[serde(default = "default_low_priority_confidence")]
    pub low_priority_confidence: f64,

    /// Damping constant for the sentiment score curve. Larger values pull
    /// scores toward zero for short texts.
    #[serde(default = "default_sentiment_damping")]
    pub sentiment_damping: f64,

    /// Optional path to a TOML keyword lexicon replacing the built-in
    /// per-category vocabularies.
    #[serde(default)]
    pub keyword_lexicon_path: Option<String>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            fallback_confidence_threshold: default_fallback_confidence(),
            high_priority_sentiment: default_high_priority_sentiment(),
            low_priority_sentiment: default_low_priority_sentiment(),
            low_priority_confidence: default_low_priority_confidence(),
            sentiment_damping: default_sentiment_damping(),
            keyword_lexicon_path: None,
        }
    }
}

fn default_fallback_confidence() -> f64 {
    0.35
}

fn default_high_priority_sentiment() -> f64 {
    -0.3
}

fn default_low_priority_sentiment() -> f64 {
    0.05
}

fn default_low_priority_confidence() -> f64 {
    0.75
}

fn default_sentiment_damping() -> f64 {
    2.0
}

/// Per-category base resolution times, in hours.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BaseHours {
    #[serde(default = "default_hours_it")]
    pub it_issues: u32,
    #[serde(default = "default_hours_hostel")]
    pub hostel_management: u32,
    #[serde(default = "default_hours_academics")]
    pub academics: u32,
    #[serde(default = "default_hours_administration")]
    pub administration: u32,
    #[serde(default = "default_hours_library")]
    pub library: u32,
    #[serde(default = "default_hours_sports")]
    pub sports_recreation: u32,
    #[serde(default = "default_hours_other")]
    pub other: u32,
}

impl BaseHours {
    /// Base resolution time for a category.
    pub fn for_category(&self, category: Category) -> u32 {
        match category {
            Category::ItIssues => self.it_issues,
            Category::HostelManagement => self.hostel_management,
            Category::Academics => self.academics,
            Category::Administration => self.administration,
            Category::Library => self.library,
            Category::SportsRecreation => self.sports_recreation,
            Category::Other => self.other,
        }
    }
}

impl Default for BaseHours {
    fn default() -> Self {
        Self {
            it_issues: default_hours_it(),
            hostel_management: default_hours_hostel(),
            academics: default_hours_academics(),
            administration: default_hours_administration(),
            library: default_hours_library(),
            sports_recreation: default_hours_sports(),
            other: default_hours_other(),
        }
    }
}

fn default_hours_it() -> u32 {
    24
}

fn default_hours_hostel() -> u32 {
    48
}

fn default_hours_academics() -> u32 {
    72
}

fn default_hours_administration() -> u32 {
    96
}

fn default_hours_library() -> u32 {
    48
}

fn default_hours_sports() -> u32 {
    72
}

fn default_hours_other() -> u32 {
    168
}

/// Priority and resolution-time estimation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Per-category base resolution times.
    #[serde(default)]
    pub base_hours: BaseHours,

    /// Categories that always triage to High priority regardless of sentiment.
    #[serde(default = "default_critical_categories")]
    pub critical_categories: Vec<Category>,

    /// ETA multiplier applied when priority is High.
    #[serde(default = "default_high_multiplier")]
    pub high_multiplier: f64,

    /// ETA multiplier applied when priority is Low.
    #[serde(default = "default_low_multiplier")]
    pub low_multiplier: f64,

    /// Floor for predicted resolution time, in hours.
    #[serde(default = "default_minimum_hours")]
    pub minimum_hours: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_hours: BaseHours::default(),
            critical_categories: default_critical_categories(),
            high_multiplier: default_high_multiplier(),
            low_multiplier: default_low_multiplier(),
            minimum_hours: default_minimum_hours(),
        }
    }
}

fn default_critical_categories() -> Vec<Category> {
    vec![Category::HostelManagement]
}

fn default_high_multiplier() -> f64 {
    0.5
}

fn default_low_multiplier() -> f64 {
    1.5
}

fn default_minimum_hours() -> u32 {
    1
}

/// Ticket lifecycle policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LifecycleConfig {
    /// Permit reopening Resolved/Rejected tickets back to In Progress.
    #[serde(default = "default_allow_reopen")]
    pub allow_reopen: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            allow_reopen: default_allow_reopen(),
        }
    }
}

fn default_allow_reopen() -> bool {
    false
}

// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles a complete engine: temp SQLite database,
//! default-configured triage pipeline, lifecycle manager, and a recording
//! event sink. Each harness is fully isolated; tests are independent and
//! order-insensitive.

use std::sync::Arc;

use redress_config::model::RedressConfig;
use redress_core::RedressError;
use redress_lifecycle::{LifecycleManager, TransitionPolicy};
use redress_storage::Database;
use redress_triage::TriagePipeline;

use crate::recording_sink::RecordingSink;

/// Builder for creating test environments with configurable policy.
pub struct TestHarnessBuilder {
    config: RedressConfig,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config: RedressConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: RedressConfig) -> Self {
        self.config = config;
        self
    }

    /// Toggle the reopen policy.
    pub fn with_reopen(mut self, allow_reopen: bool) -> Self {
        self.config.lifecycle.allow_reopen = allow_reopen;
        self
    }

    /// Build the test harness, creating all required subsystems.
    pub async fn build(self) -> Result<TestHarness, RedressError> {
        let temp_dir = tempfile::TempDir::new()
            .map_err(|e| RedressError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let db = Database::open_with(&db_path_str, self.config.storage.wal_mode).await?;
        let pipeline = TriagePipeline::new(&self.config.triage, self.config.estimator.clone())?;
        let sink = RecordingSink::new();
        let manager = LifecycleManager::new(
            db,
            pipeline,
            TransitionPolicy::from(&self.config.lifecycle),
            sink.clone(),
        );

        Ok(TestHarness {
            manager,
            sink,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete isolated engine for integration tests.
pub struct TestHarness {
    /// The lifecycle manager under test.
    pub manager: LifecycleManager,
    /// Sink capturing every emitted event.
    pub sink: Arc<RecordingSink>,
    /// Keeps the temp database directory alive for the harness lifetime.
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Start building a harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }
}

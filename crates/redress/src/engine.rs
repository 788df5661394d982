// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine assembly shared by all subcommands.

use std::str::FromStr;
use std::sync::Arc;

use redress_config::RedressConfig;
use redress_core::{RedressError, TracingSink};
use redress_lifecycle::{LifecycleManager, TransitionPolicy};
use redress_storage::Database;
use redress_triage::TriagePipeline;

/// Initialize tracing with `RUST_LOG` override or the configured level.
pub fn init_tracing(config: &RedressConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.engine.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Open the configured database and assemble the lifecycle manager.
pub async fn build(config: &RedressConfig) -> Result<LifecycleManager, RedressError> {
    let db =
        Database::open_with(&config.storage.database_path, config.storage.wal_mode).await?;
    let pipeline = TriagePipeline::new(&config.triage, config.estimator.clone())?;
    Ok(LifecycleManager::new(
        db,
        pipeline,
        TransitionPolicy::from(&config.lifecycle),
        Arc::new(TracingSink),
    ))
}

/// Parse a user-supplied enum value with a helpful error.
pub fn parse_arg<T: FromStr>(kind: &str, value: &str, valid: &str) -> Result<T, RedressError> {
    value.parse().map_err(|_| {
        RedressError::InvalidInput(format!("unknown {kind} `{value}` (expected one of: {valid})"))
    })
}

/// Valid status names for CLI error messages.
pub const STATUS_NAMES: &str = "Pending, In Progress, Resolved, Rejected";

/// Valid category names for CLI error messages.
pub const CATEGORY_NAMES: &str = "IT Issues, Hostel Management, Academics, Administration, \
     Library, Sports & Recreation, Other";

// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Redress integration tests.
//!
//! Provides a harness that assembles an isolated engine over a temp
//! database, plus a recording event sink, for fast, deterministic,
//! CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`TestHarness`] - complete engine over a temp SQLite database
//! - [`RecordingSink`] - event sink capturing emitted events in order

pub mod harness;
pub mod recording_sink;

pub use harness::TestHarness;
pub use recording_sink::RecordingSink;

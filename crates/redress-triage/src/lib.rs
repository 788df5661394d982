// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triage pipeline for the Redress complaint engine.
//!
//! Turns unstructured complaint text into a structured routing decision:
//! normalized tokens, department category with confidence, signed
//! sentiment, priority tier, and a predicted resolution time. Every stage
//! is pure and deterministic; lexicons and tables are built once at
//! construction and never mutated.

pub mod classifier;
pub mod estimator;
pub mod normalize;
pub mod pipeline;
pub mod sentiment;

pub use classifier::{Classification, Classifier};
pub use estimator::{Estimate, Estimator, format_eta};
pub use normalize::{normalize, stem};
pub use pipeline::{TriageOutcome, TriagePipeline};
pub use sentiment::SentimentScorer;

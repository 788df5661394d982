// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Redress triage engine.

use thiserror::Error;

use crate::types::{TicketId, TicketStatus};

/// The primary error type used across the triage pipeline and lifecycle manager.
#[derive(Debug, Error)]
pub enum RedressError {
    /// Malformed or empty complaint text. User-correctable; surfaced immediately.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The classifier's lexicon or model resource failed to load.
    ///
    /// Treated as a transient infrastructure fault: callers retry with
    /// backoff. Low classification confidence is NOT this error.
    #[error("classification unavailable: {0}")]
    ClassificationUnavailable(String),

    /// A status change that the lifecycle state machine does not permit.
    /// Never retried; the ticket is left unchanged.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: TicketStatus,
        to: TicketStatus,
    },

    /// The referenced ticket does not exist.
    #[error("ticket {0} not found")]
    NotFound(TicketId),

    /// Configuration errors (invalid TOML, out-of-range thresholds, unknown keys).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_message_names_both_states() {
        let err = RedressError::InvalidTransition {
            from: TicketStatus::Pending,
            to: TicketStatus::Resolved,
        };
        let msg = err.to_string();
        assert!(msg.contains("Pending"));
        assert!(msg.contains("Resolved"));
    }

    #[test]
    fn not_found_message_names_ticket() {
        let err = RedressError::NotFound(TicketId(99));
        assert_eq!(err.to_string(), "ticket 99 not found");
    }
}

// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Redress complaint triage engine.
//!
//! This crate provides the domain types, error taxonomy, and event
//! contracts used throughout the Redress workspace. The triage pipeline,
//! storage layer, and lifecycle manager all build on the definitions here.

pub mod error;
pub mod events;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RedressError;
pub use events::{EventSink, TicketEvent, TracingSink};
pub use types::{
    ActorId, Category, CategoryInfo, HistoryEntry, Priority, SubmitterId, Ticket, TicketFilter,
    TicketId, TicketStatus,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_taxonomy_is_complete() {
        // Verify all error variants exist and can be constructed.
        let _invalid = RedressError::InvalidInput("empty".into());
        let _unavailable = RedressError::ClassificationUnavailable("lexicon missing".into());
        let _transition = RedressError::InvalidTransition {
            from: TicketStatus::Pending,
            to: TicketStatus::Resolved,
        };
        let _not_found = RedressError::NotFound(TicketId(1));
        let _config = RedressError::Config("bad threshold".into());
        let _storage = RedressError::Storage {
            source: Box::new(std::io::Error::other("disk")),
        };
        let _internal = RedressError::Internal("unexpected".into());
    }

    #[test]
    fn category_set_is_closed_at_seven() {
        assert_eq!(Category::ALL.len(), 7);
    }
}

// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage-facing model types.
//!
//! The canonical domain types live in `redress-core`; this module
//! re-exports them and adds the write-side shapes the query layer needs.

pub use redress_core::types::{
    ActorId, Category, CategoryInfo, HistoryEntry, Priority, SubmitterId, Ticket, TicketFilter,
    TicketId, TicketStatus,
};

/// Fields for a ticket about to be created. The store assigns the id,
/// the initial `Pending` status, and the timestamps.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub submitter: SubmitterId,
    pub description: String,
    pub declared_category: Option<Category>,
    pub ai_category: Category,
    pub sentiment_score: f64,
    pub priority: Priority,
    pub predicted_resolution_hours: u32,
}

/// Outcome of a conditional write evaluated inside a store transaction.
///
/// Domain conflicts come back as values, not errors: the transaction has
/// already rolled back cleanly and the caller decides how to surface them.
#[derive(Debug, Clone)]
pub enum WriteOutcome {
    /// The write committed; carries the ticket's post-write state and the
    /// status it held before the write.
    Applied {
        ticket: Ticket,
        previous: TicketStatus,
    },
    /// No ticket row with the given id.
    NotFound,
    /// The ticket's current status was not one the caller permitted.
    InvalidFrom { current: TicketStatus },
}

/// A database row holding a value the domain enums cannot parse.
#[derive(Debug, thiserror::Error)]
#[error("corrupt {field} value in database: `{value}`")]
pub struct CorruptRow {
    pub field: &'static str,
    pub value: String,
}

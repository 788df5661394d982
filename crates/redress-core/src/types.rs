// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common domain types for complaints, tickets, and triage output.
//!
//! Category, priority, and status are closed enumerations (not open
//! strings) so classifier output and lifecycle walks are exhaustively
//! testable. Display strings match the labels the support desk shows
//! to staff, and are what the storage layer persists.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a ticket. Assigned by the store at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub i64);

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identity of the end user who submitted a complaint.
///
/// Supplied by the identity collaborator; the core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmitterId(pub String);

/// Opaque identity of the staff member performing a lifecycle action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);

/// Department category a complaint routes to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Category {
    #[strum(serialize = "IT Issues")]
    #[serde(rename = "IT Issues")]
    ItIssues,
    #[strum(serialize = "Hostel Management")]
    #[serde(rename = "Hostel Management")]
    HostelManagement,
    #[strum(serialize = "Academics")]
    Academics,
    #[strum(serialize = "Administration")]
    Administration,
    #[strum(serialize = "Library")]
    Library,
    #[strum(serialize = "Sports & Recreation")]
    #[serde(rename = "Sports & Recreation")]
    SportsRecreation,
    #[strum(serialize = "Other")]
    Other,
}

impl Category {
    /// All categories in fixed priority order.
    ///
    /// The classifier breaks score ties by this order, so classification
    /// stays reproducible across runs. `Other` is last: it is the
    /// low-confidence fallback, never a tie-winner.
    pub const ALL: [Category; 7] = [
        Category::ItIssues,
        Category::HostelManagement,
        Category::Academics,
        Category::Administration,
        Category::Library,
        Category::SportsRecreation,
        Category::Other,
    ];
}

/// Priority tier of a ticket. Ordered: `Low < Medium < High`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Lifecycle status of a ticket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum TicketStatus {
    Pending,
    #[strum(serialize = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Rejected,
}

impl TicketStatus {
    /// Whether this status ends the lifecycle (absent an explicit reopen policy).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Rejected)
    }
}

/// One submitted complaint and its full structured triage state.
///
/// `description` and the computed triage fields (`ai_category`,
/// `sentiment_score`, `priority`, `predicted_resolution_hours`) are
/// immutable after creation. Only the lifecycle manager mutates
/// `status`, `assigned_to`, `resolved_at`, and `resolution_notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub submitter: SubmitterId,
    /// Raw complaint text as submitted.
    pub description: String,
    /// Category the submitter picked on the intake form, if any.
    pub declared_category: Option<Category>,
    /// Category computed by the classifier.
    pub ai_category: Category,
    /// Signed sentiment in [-1.0, 1.0]; negative indicates distress/urgency.
    pub sentiment_score: f64,
    pub priority: Priority,
    /// Predicted resolution time in hours (>= 1).
    pub predicted_resolution_hours: u32,
    pub status: TicketStatus,
    /// ISO 8601 UTC timestamp.
    pub submitted_at: String,
    /// ISO 8601 UTC timestamp. Non-null iff `status` is terminal.
    pub resolved_at: Option<String>,
    /// Routing target (staff member or queue) currently owning the ticket.
    pub assigned_to: Option<String>,
    /// Free-text notes recorded when the ticket entered a terminal state.
    pub resolution_notes: Option<String>,
}

/// One immutable audit record of a ticket's status change.
///
/// Appended at creation (initial `Pending`) and at every transition or
/// reassignment; never updated or deleted. The ordered sequence of
/// entries for a ticket is the sole source of truth for how it got to
/// its current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub ticket_id: TicketId,
    /// Status the ticket held after this event.
    pub status: TicketStatus,
    pub actor: ActorId,
    pub comment: Option<String>,
    /// ISO 8601 UTC timestamp.
    pub created_at: String,
}

/// Reference data describing one routing target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub department: String,
    pub description: String,
}

/// Filter for read-only ticket listings. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub category: Option<Category>,
    pub submitter: Option<SubmitterId>,
}

// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The ticket lifecycle manager: sole mutator of ticket state.
//!
//! `submit` runs the triage pipeline and creates the ticket atomically
//! with its first history entry; `transition` and `reassign` apply staff
//! actions. Each mutation executes as one storage transaction evaluated
//! against committed state, so racing staff actions on the same ticket
//! resolve as a strict sequence while different tickets proceed
//! independently. The manager performs no retries: retry policy belongs
//! to callers.

use std::sync::Arc;

use redress_core::{
    ActorId, Category, CategoryInfo, EventSink, HistoryEntry, RedressError, SubmitterId, Ticket,
    TicketEvent, TicketFilter, TicketId, TicketStatus,
};
use redress_storage::{Database, NewTicket, WriteOutcome, queries};
use redress_triage::TriagePipeline;
use tracing::info;

use crate::transitions::{TransitionPolicy, permitted_sources};

/// Comment recorded on the initial history entry of every ticket.
const SUBMIT_COMMENT: &str = "complaint submitted";

/// Lifecycle manager over a database, a triage pipeline, and a policy.
pub struct LifecycleManager {
    db: Database,
    pipeline: TriagePipeline,
    policy: TransitionPolicy,
    sink: Arc<dyn EventSink>,
}

impl LifecycleManager {
    pub fn new(
        db: Database,
        pipeline: TriagePipeline,
        policy: TransitionPolicy,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            db,
            pipeline,
            policy,
            sink,
        }
    }

    /// Submit a complaint: triage the text and create the ticket.
    ///
    /// The ticket row and its initial `Pending` history entry commit in
    /// one transaction; a triage failure (empty text, unavailable
    /// classifier) aborts before anything is written, so no orphaned
    /// ticket or history row can exist.
    pub async fn submit(
        &self,
        description: &str,
        submitter: SubmitterId,
        declared_category: Option<Category>,
    ) -> Result<Ticket, RedressError> {
        let outcome = self.pipeline.run(description)?;

        let new = NewTicket {
            submitter,
            description: description.to_string(),
            declared_category,
            ai_category: outcome.category,
            sentiment_score: outcome.sentiment,
            priority: outcome.priority,
            predicted_resolution_hours: outcome.predicted_hours,
        };
        let ticket =
            queries::tickets::insert_with_history(&self.db, &new, Some(SUBMIT_COMMENT.to_string()))
                .await?;

        info!(
            ticket_id = %ticket.id,
            category = %ticket.ai_category,
            priority = %ticket.priority,
            predicted_hours = ticket.predicted_resolution_hours,
            "ticket submitted"
        );
        self.sink
            .emit(TicketEvent::Created {
                ticket_id: ticket.id,
                category: ticket.ai_category,
                priority: ticket.priority,
            })
            .await?;

        Ok(ticket)
    }

    /// Move a ticket to a new status.
    ///
    /// Fails with `NotFound` for unknown tickets and `InvalidTransition`
    /// for moves the state machine forbids; both leave all state
    /// unchanged. On success exactly one history entry is appended and a
    /// `StatusChanged` event is emitted.
    pub async fn transition(
        &self,
        id: TicketId,
        new_status: TicketStatus,
        actor: ActorId,
        comment: Option<String>,
    ) -> Result<Ticket, RedressError> {
        let permitted = permitted_sources(new_status, self.policy);
        let outcome =
            queries::tickets::transition(&self.db, id, new_status, actor.clone(), comment, permitted)
                .await?;

        match outcome {
            WriteOutcome::Applied { ticket, previous } => {
                info!(
                    ticket_id = %id,
                    from = %previous,
                    to = %new_status,
                    actor = %actor.0,
                    "ticket transitioned"
                );
                self.sink
                    .emit(TicketEvent::StatusChanged {
                        ticket_id: id,
                        from: previous,
                        to: new_status,
                        actor,
                    })
                    .await?;
                Ok(ticket)
            }
            WriteOutcome::NotFound => Err(RedressError::NotFound(id)),
            WriteOutcome::InvalidFrom { current } => Err(RedressError::InvalidTransition {
                from: current,
                to: new_status,
            }),
        }
    }

    /// Hand a ticket to a different assignee.
    ///
    /// Does not change status, but still appends a history entry so the
    /// reassignment is auditable, and emits a `Reassigned` event.
    pub async fn reassign(
        &self,
        id: TicketId,
        assignee: &str,
        actor: ActorId,
    ) -> Result<Ticket, RedressError> {
        let comment = format!("reassigned to {assignee}");
        let outcome = queries::tickets::reassign(
            &self.db,
            id,
            assignee.to_string(),
            actor.clone(),
            Some(comment),
        )
        .await?;

        match outcome {
            WriteOutcome::Applied { ticket, .. } => {
                info!(ticket_id = %id, assignee, actor = %actor.0, "ticket reassigned");
                self.sink
                    .emit(TicketEvent::Reassigned {
                        ticket_id: id,
                        assigned_to: assignee.to_string(),
                        actor,
                    })
                    .await?;
                Ok(ticket)
            }
            WriteOutcome::NotFound => Err(RedressError::NotFound(id)),
            WriteOutcome::InvalidFrom { current } => Err(RedressError::Internal(format!(
                "reassign rejected unexpectedly at status {current}"
            ))),
        }
    }

    /// Read one ticket. Never mutates triage fields.
    pub async fn get(&self, id: TicketId) -> Result<Ticket, RedressError> {
        queries::tickets::get(&self.db, id)
            .await?
            .ok_or(RedressError::NotFound(id))
    }

    /// Read tickets matching a filter, newest first.
    pub async fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, RedressError> {
        queries::tickets::list(&self.db, filter).await
    }

    /// Read a ticket's full audit trail, oldest first.
    pub async fn history(&self, id: TicketId) -> Result<Vec<HistoryEntry>, RedressError> {
        // Distinguish "no such ticket" from "no history" (the latter
        // cannot happen for a ticket that exists).
        self.get(id).await?;
        queries::history::for_ticket(&self.db, id).await
    }

    /// Category reference data.
    pub async fn categories(&self) -> Result<Vec<CategoryInfo>, RedressError> {
        queries::categories::all(&self.db).await
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logical lifecycle events and the notification sink contract.
//!
//! The core emits one event after each successful lifecycle mutation.
//! Delivery (email, in-app) is a collaborator concern behind [`EventSink`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RedressError;
use crate::types::{ActorId, Category, Priority, TicketId, TicketStatus};

/// A logical notification event produced by the lifecycle manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TicketEvent {
    /// A new ticket was created by `submit`.
    Created {
        ticket_id: TicketId,
        category: Category,
        priority: Priority,
    },
    /// A ticket moved to a new status.
    StatusChanged {
        ticket_id: TicketId,
        from: TicketStatus,
        to: TicketStatus,
        actor: ActorId,
    },
    /// A ticket was handed to a different assignee; status unchanged.
    Reassigned {
        ticket_id: TicketId,
        assigned_to: String,
        actor: ActorId,
    },
}

/// Sink for lifecycle events.
///
/// Implementations must not block the lifecycle operation on delivery;
/// a failed emit is reported to the caller but the mutation it follows
/// has already committed.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Record or forward one event.
    async fn emit(&self, event: TicketEvent) -> Result<(), RedressError>;
}

/// Default sink that records events as structured log lines.
pub struct TracingSink;

#[async_trait]
impl EventSink for TracingSink {
    async fn emit(&self, event: TicketEvent) -> Result<(), RedressError> {
        match &event {
            TicketEvent::Created {
                ticket_id,
                category,
                priority,
            } => info!(
                ticket_id = %ticket_id,
                category = %category,
                priority = %priority,
                "ticket created"
            ),
            TicketEvent::StatusChanged {
                ticket_id,
                from,
                to,
                actor,
            } => info!(
                ticket_id = %ticket_id,
                from = %from,
                to = %to,
                actor = %actor.0,
                "ticket status changed"
            ),
            TicketEvent::Reassigned {
                ticket_id,
                assigned_to,
                actor,
            } => info!(
                ticket_id = %ticket_id,
                assigned_to = %assigned_to,
                actor = %actor.0,
                "ticket reassigned"
            ),
        }
        Ok(())
    }
}

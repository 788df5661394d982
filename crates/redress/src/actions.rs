// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `redress transition` / `reassign` - staff lifecycle actions.

use redress_config::RedressConfig;
use redress_core::{ActorId, RedressError, TicketId, TicketStatus};

use crate::engine;

pub async fn transition(
    config: &RedressConfig,
    ticket_id: i64,
    status: &str,
    actor: &str,
    comment: Option<String>,
) -> Result<(), RedressError> {
    let new_status =
        engine::parse_arg::<TicketStatus>("status", status, engine::STATUS_NAMES)?;

    let manager = engine::build(config).await?;
    let ticket = manager
        .transition(
            TicketId(ticket_id),
            new_status,
            ActorId(actor.to_string()),
            comment,
        )
        .await?;

    println!("Ticket #{} is now {}", ticket.id, ticket.status);
    if let Some(resolved_at) = &ticket.resolved_at {
        println!("  resolved at {resolved_at}");
    }
    Ok(())
}

pub async fn reassign(
    config: &RedressConfig,
    ticket_id: i64,
    assignee: &str,
    actor: &str,
) -> Result<(), RedressError> {
    let manager = engine::build(config).await?;
    let ticket = manager
        .reassign(TicketId(ticket_id), assignee, ActorId(actor.to_string()))
        .await?;

    println!(
        "Ticket #{} assigned to {} (status {})",
        ticket.id,
        ticket.assigned_to.as_deref().unwrap_or("-"),
        ticket.status
    );
    Ok(())
}

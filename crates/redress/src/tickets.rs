// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `redress show` / `list` / `history` - read-only ticket queries.

use redress_config::RedressConfig;
use redress_core::{
    Category, RedressError, SubmitterId, Ticket, TicketFilter, TicketId, TicketStatus,
};

use crate::engine;

fn print_ticket(ticket: &Ticket) {
    println!("Ticket #{}", ticket.id);
    println!("  submitter: {}", ticket.submitter.0);
    println!("  status:    {}", ticket.status);
    println!("  category:  {}", ticket.ai_category);
    if let Some(declared) = ticket.declared_category {
        println!("  declared:  {declared}");
    }
    println!("  priority:  {}", ticket.priority);
    println!("  sentiment: {:+.2}", ticket.sentiment_score);
    println!("  estimate:  {}h", ticket.predicted_resolution_hours);
    println!("  submitted: {}", ticket.submitted_at);
    if let Some(resolved_at) = &ticket.resolved_at {
        println!("  resolved:  {resolved_at}");
    }
    if let Some(assigned_to) = &ticket.assigned_to {
        println!("  assignee:  {assigned_to}");
    }
    if let Some(notes) = &ticket.resolution_notes {
        println!("  notes:     {notes}");
    }
    println!("  text:      {}", ticket.description);
}

pub async fn show(config: &RedressConfig, ticket_id: i64) -> Result<(), RedressError> {
    let manager = engine::build(config).await?;
    let ticket = manager.get(TicketId(ticket_id)).await?;
    print_ticket(&ticket);
    Ok(())
}

pub async fn list(
    config: &RedressConfig,
    status: Option<&str>,
    category: Option<&str>,
    submitter: Option<&str>,
) -> Result<(), RedressError> {
    let filter = TicketFilter {
        status: status
            .map(|s| engine::parse_arg::<TicketStatus>("status", s, engine::STATUS_NAMES))
            .transpose()?,
        category: category
            .map(|c| engine::parse_arg::<Category>("category", c, engine::CATEGORY_NAMES))
            .transpose()?,
        submitter: submitter.map(|s| SubmitterId(s.to_string())),
    };

    let manager = engine::build(config).await?;
    let tickets = manager.list(&filter).await?;

    if tickets.is_empty() {
        println!("no tickets match");
        return Ok(());
    }
    for ticket in &tickets {
        println!(
            "#{}  {:<12} {:<20} {:<6} {}",
            ticket.id,
            ticket.status.to_string(),
            ticket.ai_category.to_string(),
            ticket.priority.to_string(),
            ticket.submitter.0
        );
    }
    Ok(())
}

pub async fn history(config: &RedressConfig, ticket_id: i64) -> Result<(), RedressError> {
    let manager = engine::build(config).await?;
    let entries = manager.history(TicketId(ticket_id)).await?;

    println!("History for ticket #{ticket_id}");
    for entry in &entries {
        let comment = entry.comment.as_deref().unwrap_or("-");
        println!(
            "  {}  {:<12} by {:<16} {}",
            entry.created_at,
            entry.status.to_string(),
            entry.actor.0,
            comment
        );
    }
    Ok(())
}

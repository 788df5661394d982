// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `redress submit` - run the triage pipeline and create a ticket.

use redress_config::RedressConfig;
use redress_core::{Category, RedressError, SubmitterId};
use redress_triage::format_eta;

use crate::engine;

pub async fn run(
    config: &RedressConfig,
    text: &str,
    submitter: &str,
    category: Option<&str>,
) -> Result<(), RedressError> {
    let declared = category
        .map(|c| engine::parse_arg::<Category>("category", c, engine::CATEGORY_NAMES))
        .transpose()?;

    let manager = engine::build(config).await?;
    let ticket = manager
        .submit(text, SubmitterId(submitter.to_string()), declared)
        .await?;

    println!("Ticket #{} created", ticket.id);
    println!("  category:  {}", ticket.ai_category);
    println!("  priority:  {}", ticket.priority);
    println!("  sentiment: {:+.2}", ticket.sentiment_score);
    println!(
        "  estimate:  {} ({}h)",
        format_eta(ticket.predicted_resolution_hours),
        ticket.predicted_resolution_hours
    );
    println!("  status:    {}", ticket.status);
    Ok(())
}

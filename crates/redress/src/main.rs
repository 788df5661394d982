// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Redress - automated complaint intake and triage.
//!
//! This is the binary entry point for the Redress engine: submit
//! complaints, inspect tickets and their audit trail, and drive the
//! status lifecycle from the command line.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod actions;
mod engine;
mod submit;
mod tickets;

/// Redress - automated complaint intake and triage engine.
#[derive(Parser, Debug)]
#[command(name = "redress", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a complaint and print the triaged ticket.
    Submit {
        /// The complaint text.
        text: String,
        /// Submitter identity (opaque id from the identity provider).
        #[arg(long)]
        submitter: String,
        /// Category the submitter picked on the intake form, if any.
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one ticket.
    Show {
        ticket_id: i64,
    },
    /// List tickets, optionally filtered.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        submitter: Option<String>,
    },
    /// Show a ticket's full audit trail.
    History {
        ticket_id: i64,
    },
    /// Move a ticket to a new status.
    Transition {
        ticket_id: i64,
        /// Target status: "In Progress", "Resolved", or "Rejected".
        status: String,
        /// Acting staff identity.
        #[arg(long)]
        actor: String,
        /// Free-text comment recorded in the audit trail.
        #[arg(long)]
        comment: Option<String>,
    },
    /// Hand a ticket to a different assignee.
    Reassign {
        ticket_id: i64,
        assignee: String,
        #[arg(long)]
        actor: String,
    },
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match redress_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            redress_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    engine::init_tracing(&config);

    let result = match cli.command {
        Some(Commands::Submit {
            text,
            submitter,
            category,
        }) => submit::run(&config, &text, &submitter, category.as_deref()).await,
        Some(Commands::Show { ticket_id }) => tickets::show(&config, ticket_id).await,
        Some(Commands::List {
            status,
            category,
            submitter,
        }) => {
            tickets::list(
                &config,
                status.as_deref(),
                category.as_deref(),
                submitter.as_deref(),
            )
            .await
        }
        Some(Commands::History { ticket_id }) => tickets::history(&config, ticket_id).await,
        Some(Commands::Transition {
            ticket_id,
            status,
            actor,
            comment,
        }) => actions::transition(&config, ticket_id, &status, &actor, comment).await,
        Some(Commands::Reassign {
            ticket_id,
            assignee,
            actor,
        }) => actions::reassign(&config, ticket_id, &assignee, &actor).await,
        Some(Commands::Config) => {
            match toml::to_string_pretty(&config) {
                Ok(rendered) => {
                    println!("{rendered}");
                    Ok(())
                }
                Err(e) => Err(redress_core::RedressError::Internal(e.to_string())),
            }
        }
        None => {
            println!("redress: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("redress: {e}");
        std::process::exit(1);
    }
}

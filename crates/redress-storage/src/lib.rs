// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Redress triage engine.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, and typed
//! operations for tickets, their append-only history, and category
//! reference data. Ticket mutations are transactional: the ticket row and
//! its history row always commit together.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use database::{Database, now_iso};
pub use models::{NewTicket, WriteOutcome};

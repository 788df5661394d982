// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read access to the append-only ticket history.
//!
//! History rows are written only by the ticket mutation paths in
//! `queries::tickets`; this module never writes.

use redress_core::RedressError;
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::models::{ActorId, HistoryEntry, TicketId};

/// All history entries for a ticket, oldest first.
///
/// The row id tiebreaks entries created within the same timestamp
/// millisecond, so the order always matches the order of the writes.
pub async fn for_ticket(db: &Database, id: TicketId) -> Result<Vec<HistoryEntry>, RedressError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT history_id, ticket_id, status, actor, comment, created_at \
                 FROM ticket_history WHERE ticket_id = ?1 \
                 ORDER BY created_at ASC, history_id ASC",
            )?;
            let rows = stmt.query_map(params![id.0], |row| {
                let status_raw: String = row.get(2)?;
                let status = status_raw.parse().map_err(|_| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        rusqlite::types::Type::Text,
                        Box::new(crate::models::CorruptRow {
                            field: "status",
                            value: status_raw,
                        }),
                    )
                })?;
                Ok(HistoryEntry {
                    id: row.get(0)?,
                    ticket_id: TicketId(row.get(1)?),
                    status,
                    actor: ActorId(row.get(3)?),
                    comment: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(map_tr_err)
}

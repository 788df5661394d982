// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ticket write and read operations.
//!
//! Every mutation runs as one transaction: the ticket row and its history
//! row commit together or not at all. Conditional writes re-read the
//! ticket's current status inside the transaction, so a racing caller is
//! always evaluated against committed state, never a stale read.

use redress_core::RedressError;
use rusqlite::params;

use crate::database::{Database, map_tr_err, now_iso};
use crate::models::{
    ActorId, Category, CorruptRow, NewTicket, Ticket, TicketFilter, TicketId, TicketStatus,
    WriteOutcome,
};

/// Column list shared by every ticket SELECT, in `row_to_ticket` order.
const TICKET_COLUMNS: &str = "ticket_id, submitter, description, declared_category, \
     ai_category, sentiment_score, priority, predicted_resolution_hours, status, \
     submitted_at, resolved_at, assigned_to, resolution_notes";

fn corrupt(field: &'static str, value: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(CorruptRow { field, value }),
    )
}

fn parse_status(value: String) -> Result<TicketStatus, rusqlite::Error> {
    value
        .parse()
        .map_err(|_| corrupt("status", value))
}

fn row_to_ticket(row: &rusqlite::Row<'_>) -> Result<Ticket, rusqlite::Error> {
    let declared: Option<String> = row.get(3)?;
    let declared_category = match declared {
        Some(value) => Some(
            value
                .parse::<Category>()
                .map_err(|_| corrupt("declared_category", value))?,
        ),
        None => None,
    };
    let ai_raw: String = row.get(4)?;
    let ai_category = ai_raw
        .parse::<Category>()
        .map_err(|_| corrupt("ai_category", ai_raw))?;
    let priority_raw: String = row.get(6)?;
    let priority = priority_raw
        .parse()
        .map_err(|_| corrupt("priority", priority_raw))?;
    let status = parse_status(row.get(8)?)?;

    Ok(Ticket {
        id: TicketId(row.get(0)?),
        submitter: crate::models::SubmitterId(row.get(1)?),
        description: row.get(2)?,
        declared_category,
        ai_category,
        sentiment_score: row.get(5)?,
        priority,
        predicted_resolution_hours: row.get(7)?,
        status,
        submitted_at: row.get(9)?,
        resolved_at: row.get(10)?,
        assigned_to: row.get(11)?,
        resolution_notes: row.get(12)?,
    })
}

/// Fetch one ticket within an open connection or transaction.
fn fetch_ticket(
    conn: &rusqlite::Connection,
    id: i64,
) -> Result<Option<Ticket>, rusqlite::Error> {
    let sql = format!("SELECT {TICKET_COLUMNS} FROM tickets WHERE ticket_id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    match stmt.query_row(params![id], row_to_ticket) {
        Ok(ticket) => Ok(Some(ticket)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

fn fetch_status(
    conn: &rusqlite::Connection,
    id: i64,
) -> Result<Option<TicketStatus>, rusqlite::Error> {
    let result = conn.query_row(
        "SELECT status FROM tickets WHERE ticket_id = ?1",
        params![id],
        |row| row.get::<_, String>(0),
    );
    match result {
        Ok(raw) => Ok(Some(parse_status(raw)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Create a ticket in `Pending` state together with its initial history
/// entry, atomically.
///
/// A ticket never exists without a matching first history row: both
/// inserts share one transaction, and any failure rolls both back.
pub async fn insert_with_history(
    db: &Database,
    new: &NewTicket,
    comment: Option<String>,
) -> Result<Ticket, RedressError> {
    let new = new.clone();
    let now = now_iso();
    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO tickets (submitter, description, declared_category, ai_category, \
                 sentiment_score, priority, predicted_resolution_hours, status, submitted_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    new.submitter.0,
                    new.description,
                    new.declared_category.map(|c| c.to_string()),
                    new.ai_category.to_string(),
                    new.sentiment_score,
                    new.priority.to_string(),
                    new.predicted_resolution_hours,
                    TicketStatus::Pending.to_string(),
                    now,
                ],
            )?;
            let id = tx.last_insert_rowid();
            tx.execute(
                "INSERT INTO ticket_history (ticket_id, status, actor, comment, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    id,
                    TicketStatus::Pending.to_string(),
                    new.submitter.0,
                    comment,
                    now,
                ],
            )?;
            let ticket =
                fetch_ticket(&tx, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;
            tx.commit()?;
            Ok(ticket)
        })
        .await
        .map_err(map_tr_err)
}

/// Get a ticket by id.
pub async fn get(db: &Database, id: TicketId) -> Result<Option<Ticket>, RedressError> {
    db.connection()
        .call(move |conn| fetch_ticket(conn, id.0))
        .await
        .map_err(map_tr_err)
}

/// List tickets matching a filter, newest first.
pub async fn list(db: &Database, filter: &TicketFilter) -> Result<Vec<Ticket>, RedressError> {
    let status = filter.status.map(|s| s.to_string());
    let category = filter.category.map(|c| c.to_string());
    let submitter = filter.submitter.clone().map(|s| s.0);

    db.connection()
        .call(move |conn| {
            let mut sql = format!("SELECT {TICKET_COLUMNS} FROM tickets");
            let mut clauses: Vec<String> = Vec::new();
            let mut bound: Vec<&dyn rusqlite::ToSql> = Vec::new();

            if let Some(value) = &status {
                clauses.push(format!("status = ?{}", bound.len() + 1));
                bound.push(value);
            }
            if let Some(value) = &category {
                clauses.push(format!("ai_category = ?{}", bound.len() + 1));
                bound.push(value);
            }
            if let Some(value) = &submitter {
                clauses.push(format!("submitter = ?{}", bound.len() + 1));
                bound.push(value);
            }
            if !clauses.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&clauses.join(" AND "));
            }
            sql.push_str(" ORDER BY submitted_at DESC, ticket_id DESC");

            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(&bound[..], row_to_ticket)?;
            let mut tickets = Vec::new();
            for row in rows {
                tickets.push(row?);
            }
            Ok(tickets)
        })
        .await
        .map_err(map_tr_err)
}

/// Conditionally move a ticket to a new status, appending the matching
/// history row in the same transaction.
///
/// `permitted_from` is the set of source statuses the caller's state
/// machine allows for this target; the check runs against the status row
/// as committed at transaction time (compare-and-swap shape). Entering a
/// terminal status stamps `resolved_at` and records the comment as
/// resolution notes; leaving one (reopen) clears `resolved_at`.
pub async fn transition(
    db: &Database,
    id: TicketId,
    new_status: TicketStatus,
    actor: ActorId,
    comment: Option<String>,
    permitted_from: Vec<TicketStatus>,
) -> Result<WriteOutcome, RedressError> {
    let now = now_iso();
    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let Some(current) = fetch_status(&tx, id.0)? else {
                return Ok(WriteOutcome::NotFound);
            };
            if !permitted_from.contains(&current) {
                // Dropping the transaction rolls back; nothing written.
                return Ok(WriteOutcome::InvalidFrom { current });
            }

            if new_status.is_terminal() {
                tx.execute(
                    "UPDATE tickets SET status = ?1, resolved_at = ?2, \
                     resolution_notes = COALESCE(?3, resolution_notes) \
                     WHERE ticket_id = ?4 AND status = ?5",
                    params![
                        new_status.to_string(),
                        now,
                        comment,
                        id.0,
                        current.to_string(),
                    ],
                )?;
            } else {
                tx.execute(
                    "UPDATE tickets SET status = ?1, resolved_at = NULL \
                     WHERE ticket_id = ?2 AND status = ?3",
                    params![new_status.to_string(), id.0, current.to_string()],
                )?;
            }

            tx.execute(
                "INSERT INTO ticket_history (ticket_id, status, actor, comment, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id.0, new_status.to_string(), actor.0, comment, now],
            )?;

            let ticket =
                fetch_ticket(&tx, id.0)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;
            tx.commit()?;
            Ok(WriteOutcome::Applied {
                ticket,
                previous: current,
            })
        })
        .await
        .map_err(map_tr_err)
}

/// Change a ticket's assignee, appending an audit history row at the
/// unchanged status in the same transaction.
pub async fn reassign(
    db: &Database,
    id: TicketId,
    assignee: String,
    actor: ActorId,
    comment: Option<String>,
) -> Result<WriteOutcome, RedressError> {
    let now = now_iso();
    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let Some(current) = fetch_status(&tx, id.0)? else {
                return Ok(WriteOutcome::NotFound);
            };

            tx.execute(
                "UPDATE tickets SET assigned_to = ?1 WHERE ticket_id = ?2",
                params![assignee, id.0],
            )?;
            tx.execute(
                "INSERT INTO ticket_history (ticket_id, status, actor, comment, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id.0, current.to_string(), actor.0, comment, now],
            )?;

            let ticket =
                fetch_ticket(&tx, id.0)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;
            tx.commit()?;
            Ok(WriteOutcome::Applied {
                ticket,
                previous: current,
            })
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, SubmitterId};

    async fn test_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    fn sample_ticket(submitter: &str) -> NewTicket {
        NewTicket {
            submitter: SubmitterId(submitter.to_string()),
            description: "wifi is down in the lab".to_string(),
            declared_category: None,
            ai_category: Category::ItIssues,
            sentiment_score: -0.4,
            priority: Priority::High,
            predicted_resolution_hours: 12,
        }
    }

    #[tokio::test]
    async fn insert_creates_ticket_and_first_history_row() {
        let db = test_db().await;
        let ticket = insert_with_history(&db, &sample_ticket("u1"), None)
            .await
            .unwrap();

        assert_eq!(ticket.status, TicketStatus::Pending);
        assert!(ticket.resolved_at.is_none());

        let history = crate::queries::history::for_ticket(&db, ticket.id)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, TicketStatus::Pending);
        assert_eq!(history[0].actor.0, "u1");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_missing_ticket_returns_none() {
        let db = test_db().await;
        assert!(get(&db, TicketId(99)).await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_is_idempotent() {
        let db = test_db().await;
        let ticket = insert_with_history(&db, &sample_ticket("u1"), None)
            .await
            .unwrap();
        let a = get(&db, ticket.id).await.unwrap().unwrap();
        let b = get(&db, ticket.id).await.unwrap().unwrap();
        assert_eq!(a, b);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_filters_by_status_and_submitter() {
        let db = test_db().await;
        let t1 = insert_with_history(&db, &sample_ticket("u1"), None)
            .await
            .unwrap();
        insert_with_history(&db, &sample_ticket("u2"), None)
            .await
            .unwrap();

        transition(
            &db,
            t1.id,
            TicketStatus::InProgress,
            ActorId("staff".into()),
            None,
            vec![TicketStatus::Pending],
        )
        .await
        .unwrap();

        let all = list(&db, &TicketFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let pending = list(
            &db,
            &TicketFilter {
                status: Some(TicketStatus::Pending),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(pending.len(), 1);

        let by_user = list(
            &db,
            &TicketFilter {
                submitter: Some(SubmitterId("u1".into())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(by_user.len(), 1);
        assert_eq!(by_user[0].id, t1.id);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn transition_rejects_unpermitted_source_status() {
        let db = test_db().await;
        let ticket = insert_with_history(&db, &sample_ticket("u1"), None)
            .await
            .unwrap();

        // Resolve directly from Pending is not permitted by the caller.
        let outcome = transition(
            &db,
            ticket.id,
            TicketStatus::Resolved,
            ActorId("staff".into()),
            None,
            vec![TicketStatus::InProgress],
        )
        .await
        .unwrap();
        assert!(matches!(
            outcome,
            WriteOutcome::InvalidFrom {
                current: TicketStatus::Pending
            }
        ));

        // Nothing was written: status unchanged, still exactly one history row.
        let unchanged = get(&db, ticket.id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, TicketStatus::Pending);
        let history = crate::queries::history::for_ticket(&db, ticket.id)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn terminal_transition_stamps_resolution_fields() {
        let db = test_db().await;
        let ticket = insert_with_history(&db, &sample_ticket("u1"), None)
            .await
            .unwrap();

        transition(
            &db,
            ticket.id,
            TicketStatus::InProgress,
            ActorId("staff".into()),
            None,
            vec![TicketStatus::Pending],
        )
        .await
        .unwrap();
        let outcome = transition(
            &db,
            ticket.id,
            TicketStatus::Resolved,
            ActorId("staff".into()),
            Some("replaced the access point".to_string()),
            vec![TicketStatus::InProgress],
        )
        .await
        .unwrap();

        let WriteOutcome::Applied { ticket: resolved, .. } = outcome else {
            panic!("expected applied outcome");
        };
        assert_eq!(resolved.status, TicketStatus::Resolved);
        assert!(resolved.resolved_at.is_some());
        assert_eq!(
            resolved.resolution_notes.as_deref(),
            Some("replaced the access point")
        );

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopen_clears_resolved_at() {
        let db = test_db().await;
        let ticket = insert_with_history(&db, &sample_ticket("u1"), None)
            .await
            .unwrap();

        for (to, from) in [
            (TicketStatus::InProgress, TicketStatus::Pending),
            (TicketStatus::Resolved, TicketStatus::InProgress),
        ] {
            transition(&db, ticket.id, to, ActorId("staff".into()), None, vec![from])
                .await
                .unwrap();
        }

        let outcome = transition(
            &db,
            ticket.id,
            TicketStatus::InProgress,
            ActorId("staff".into()),
            None,
            vec![TicketStatus::Resolved, TicketStatus::Rejected],
        )
        .await
        .unwrap();
        let WriteOutcome::Applied { ticket: reopened, .. } = outcome else {
            panic!("expected applied outcome");
        };
        assert_eq!(reopened.status, TicketStatus::InProgress);
        assert!(reopened.resolved_at.is_none());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn transition_on_missing_ticket_is_not_found() {
        let db = test_db().await;
        let outcome = transition(
            &db,
            TicketId(404),
            TicketStatus::InProgress,
            ActorId("staff".into()),
            None,
            vec![TicketStatus::Pending],
        )
        .await
        .unwrap();
        assert!(matches!(outcome, WriteOutcome::NotFound));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reassign_keeps_status_and_appends_history() {
        let db = test_db().await;
        let ticket = insert_with_history(&db, &sample_ticket("u1"), None)
            .await
            .unwrap();

        let outcome = reassign(
            &db,
            ticket.id,
            "it-desk".to_string(),
            ActorId("manager".into()),
            Some("reassigned to it-desk".to_string()),
        )
        .await
        .unwrap();
        let WriteOutcome::Applied { ticket: updated, .. } = outcome else {
            panic!("expected applied outcome");
        };
        assert_eq!(updated.assigned_to.as_deref(), Some("it-desk"));
        assert_eq!(updated.status, TicketStatus::Pending);

        let history = crate::queries::history::for_ticket(&db, ticket.id)
            .await
            .unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].status, TicketStatus::Pending);
        assert_eq!(history[1].actor.0, "manager");

        db.close().await.unwrap();
    }
}

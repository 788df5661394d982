// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread; each lifecycle mutation runs as one transaction on that thread,
//! so a racing writer always observes the previous writer's committed
//! state. Do NOT create additional Connection instances for writes.

use redress_core::RedressError;
use tracing::info;

use crate::migrations::run_migrations;

/// Migration failure carried across the connection thread boundary.
#[derive(Debug, thiserror::Error)]
#[error("migration failed: {0}")]
struct MigrationError(String);

/// Convert a tokio-rusqlite error into RedressError::Storage.
pub fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> RedressError {
    RedressError::Storage {
        source: Box::new(e),
    }
}

/// Current UTC time as the ISO 8601 text format used in every table.
pub fn now_iso() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// SQLite-backed store for tickets, history, and category reference data.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) a database file, apply PRAGMAs, and run migrations.
    pub async fn open(path: &str) -> Result<Self, RedressError> {
        Self::open_with(path, true).await
    }

    /// Open with explicit WAL mode selection.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, RedressError> {
        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| RedressError::Storage {
                source: Box::new(e),
            })?;
        let db = Self { conn };
        db.initialize(wal_mode).await?;
        info!(path, wal_mode, "database opened");
        Ok(db)
    }

    /// Open an in-memory database with migrations applied. For tests.
    pub async fn open_in_memory() -> Result<Self, RedressError> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(|e| RedressError::Storage {
                source: Box::new(e),
            })?;
        let db = Self { conn };
        db.initialize(false).await?;
        Ok(db)
    }

    async fn initialize(&self, wal_mode: bool) -> Result<(), RedressError> {
        self.conn
            .call(move |conn| {
                if wal_mode {
                    conn.pragma_update(None, "journal_mode", "WAL")?;
                }
                conn.pragma_update(None, "foreign_keys", "ON")?;
                conn.pragma_update(None, "synchronous", "NORMAL")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        // Refinery errors are not rusqlite errors; carry them out of the
        // closure as a value and rewrap.
        let migration_result = self
            .conn
            .call(|conn| -> Result<Result<(), String>, rusqlite::Error> {
                Ok(run_migrations(conn).map_err(|e| e.to_string()))
            })
            .await
            .map_err(map_tr_err)?;
        if let Err(msg) = migration_result {
            return Err(RedressError::Storage {
                source: Box::new(MigrationError(msg)),
            });
        }
        Ok(())
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Close the background connection, flushing pending work.
    pub async fn close(self) -> Result<(), RedressError> {
        self.conn.close().await.map_err(|e| RedressError::Storage {
            source: Box::new(e),
        })
    }
}

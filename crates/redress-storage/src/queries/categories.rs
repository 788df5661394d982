// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category reference data lookups.

use redress_core::RedressError;
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::models::{Category, CategoryInfo, CorruptRow};

fn row_to_info(row: &rusqlite::Row<'_>) -> Result<CategoryInfo, rusqlite::Error> {
    let name: String = row.get(0)?;
    let category = name.parse::<Category>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(CorruptRow {
                field: "category_name",
                value: name,
            }),
        )
    })?;
    Ok(CategoryInfo {
        category,
        department: row.get(1)?,
        description: row.get(2)?,
    })
}

/// All category reference rows, in seed order.
pub async fn all(db: &Database) -> Result<Vec<CategoryInfo>, RedressError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT category_name, department, description FROM categories \
                 ORDER BY rowid ASC",
            )?;
            let rows = stmt.query_map([], row_to_info)?;
            let mut infos = Vec::new();
            for row in rows {
                infos.push(row?);
            }
            Ok(infos)
        })
        .await
        .map_err(map_tr_err)
}

/// Look up one category's reference row.
pub async fn get(db: &Database, category: Category) -> Result<Option<CategoryInfo>, RedressError> {
    let name = category.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                "SELECT category_name, department, description FROM categories \
                 WHERE category_name = ?1",
                params![name],
                row_to_info,
            );
            match result {
                Ok(info) => Ok(Some(info)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

// ABOUTME: Ingredient table queries for list, insert, and delete operations
// ABOUTME: Maps SQLite rows to Ingredient records in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use super::{Database, DatabaseError};
use chrono::{DateTime, Utc};
use pantry_core::models::{Ingredient, IngredientId, NewIngredient};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

fn row_to_ingredient(row: &SqliteRow) -> Result<Ingredient, DatabaseError> {
    let id: String = row.try_get("id")?;
    let id = id
        .parse::<IngredientId>()
        .map_err(|e| DatabaseError::InvalidData {
            context: format!("ingredient id {id:?}: {e}"),
        })?;

    Ok(Ingredient {
        id,
        name: row.try_get("name")?,
        expiry_date: row.try_get::<Option<DateTime<Utc>>, _>("expiry_date")?,
    })
}

impl Database {
    /// All ingredients in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, DatabaseError> {
        let rows = sqlx::query("SELECT id, name, expiry_date FROM ingredients ORDER BY rowid")
            .fetch_all(self.pool())
            .await?;

        rows.iter().map(row_to_ingredient).collect()
    }

    /// Insert a new ingredient with a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_ingredient(&self, new: NewIngredient) -> Result<Ingredient, DatabaseError> {
        let id = IngredientId::new();

        sqlx::query(
            "INSERT INTO ingredients (id, name, expiry_date, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(id.to_string())
        .bind(new.name())
        .bind(new.expiry_date())
        .bind(Utc::now())
        .execute(self.pool())
        .await?;

        Ok(Ingredient::from_new(id, new))
    }

    /// Delete one ingredient by identifier, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_ingredient(&self, id: IngredientId) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id.to_string())
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every ingredient whose name equals `name` ignoring case
    ///
    /// Matching happens in Rust rather than with SQL `lower()`, which only
    /// folds ASCII. The matching rows are removed by one autocommit
    /// `DELETE`, so the write waits on the busy timeout instead of failing
    /// on a read-to-write lock upgrade.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails; nothing is deleted in that case
    pub async fn delete_ingredients_by_name(&self, name: &str) -> Result<u64, DatabaseError> {
        let rows = sqlx::query("SELECT id, name, expiry_date FROM ingredients")
            .fetch_all(self.pool())
            .await?;

        let mut ids = Vec::new();
        for row in &rows {
            let ingredient = row_to_ingredient(row)?;
            if ingredient.name_matches(name) {
                ids.push(ingredient.id.to_string());
            }
        }

        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = (1..=ids.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let statement = format!("DELETE FROM ingredients WHERE id IN ({placeholders})");

        let mut query = sqlx::query(&statement);
        for id in &ids {
            query = query.bind(id);
        }

        Ok(query.execute(self.pool()).await?.rows_affected())
    }

    /// Number of stored ingredients
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_ingredients(&self) -> Result<u64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
            .fetch_one(self.pool())
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

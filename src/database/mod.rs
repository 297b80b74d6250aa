// ABOUTME: SQLite database management for the ingredient inventory
// ABOUTME: Opens the connection pool, creates the schema, and hosts repository implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! # Database Management
//!
//! The inventory lives in a single `ingredients` table. Rows are returned in
//! insertion order (`SQLite` rowid), which is the storage order clients see.

mod ingredients;

/// Repository traits and their implementations
pub mod repositories;

pub use pantry_core::errors::DatabaseError;

use crate::config::DatabaseUrl;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Connection pool size for file-backed databases
const FILE_POOL_SIZE: u32 = 5;

/// Database manager for ingredient storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (and create if needed) the database, then run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, the connection fails,
    /// or the schema cannot be applied
    pub async fn new(url: &DatabaseUrl) -> Result<Self, DatabaseError> {
        let options =
            SqliteConnectOptions::from_str(&url.to_connection_string())?.create_if_missing(true);

        let pool = match url {
            // Every connection to `:memory:` is its own database, so pin one
            // connection for the lifetime of the pool.
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        DatabaseError::ConnectionError {
                            context: format!(
                                "cannot create database directory {}: {e}",
                                parent.display()
                            ),
                        }
                    })?;
                }
                SqlitePoolOptions::new()
                    .max_connections(FILE_POOL_SIZE)
                    .connect_with(options)
                    .await?
            }
        };

        let db = Self { pool };
        db.migrate().await?;

        info!("Database ready at {url}");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        debug!("Applying ingredient schema");

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL CHECK (length(trim(name)) > 0),
                expiry_date TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::MigrationError {
            context: format!("ingredients table: {e}"),
        })?;

        Ok(())
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

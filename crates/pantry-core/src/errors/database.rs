// ABOUTME: Structured error types for ingredient storage operations
// ABOUTME: Wraps sqlx failures with enough context for server-side logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use thiserror::Error;

/// Errors raised by ingredient repositories
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open or keep a connection
    #[error("database connection failed: {context}")]
    ConnectionError {
        /// What was being attempted
        context: String,
    },

    /// A statement failed
    #[error("database query failed: {context}")]
    QueryError {
        /// What was being attempted
        context: String,
    },

    /// A stored row could not be turned back into a record
    #[error("invalid stored data: {context}")]
    InvalidData {
        /// Which column or value was bad
        context: String,
    },

    /// Schema setup failed
    #[error("database migration failed: {context}")]
    MigrationError {
        /// Which step failed
        context: String,
    },
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => Self::InvalidData {
                context: error.to_string(),
            },
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}

// ABOUTME: Repository traits decoupling services from the storage backend
// ABOUTME: SQLite implementation for production, in-memory implementation for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! Repository pattern for ingredient storage
//!
//! Services hold an `Arc<dyn IngredientRepository>` so the same request
//! handling runs against `SQLite` in production and an in-memory list in tests.

/// `SQLite`-backed ingredient repository
pub mod ingredient_repository;
/// In-memory ingredient repository
pub mod memory;

pub use ingredient_repository::IngredientRepositoryImpl;
pub use memory::InMemoryIngredientRepository;

use crate::database::DatabaseError;
use async_trait::async_trait;
use pantry_core::models::{Ingredient, IngredientId, NewIngredient};

/// Storage for ingredient records
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// All records in storage order
    async fn list(&self) -> Result<Vec<Ingredient>, DatabaseError>;

    /// Persist a new record with a fresh identifier
    async fn create(&self, new: NewIngredient) -> Result<Ingredient, DatabaseError>;

    /// Remove one record; `false` when no record has this id
    async fn delete(&self, id: IngredientId) -> Result<bool, DatabaseError>;

    /// Remove every record whose lowercased name equals the lowercased
    /// target; returns how many were removed
    async fn delete_by_name(&self, name: &str) -> Result<u64, DatabaseError>;

    /// Number of stored records
    async fn count(&self) -> Result<u64, DatabaseError>;
}

// ABOUTME: Ingredient repository implementation backed by the SQLite database
// ABOUTME: Delegates to Database query methods for list, create, and delete operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use super::IngredientRepository;
use crate::database::{Database, DatabaseError};
use async_trait::async_trait;
use pantry_core::models::{Ingredient, IngredientId, NewIngredient};

/// `SQLite` implementation of `IngredientRepository`
pub struct IngredientRepositoryImpl {
    db: Database,
}

impl IngredientRepositoryImpl {
    /// Create a new `IngredientRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryImpl {
    async fn list(&self) -> Result<Vec<Ingredient>, DatabaseError> {
        self.db.list_ingredients().await
    }

    async fn create(&self, new: NewIngredient) -> Result<Ingredient, DatabaseError> {
        self.db.create_ingredient(new).await
    }

    async fn delete(&self, id: IngredientId) -> Result<bool, DatabaseError> {
        self.db.delete_ingredient(id).await
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, DatabaseError> {
        self.db.delete_ingredients_by_name(name).await
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        self.db.count_ingredients().await
    }
}

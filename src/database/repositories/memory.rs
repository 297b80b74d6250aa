// ABOUTME: In-memory ingredient repository used as a lightweight test double
// ABOUTME: Keeps records in insertion order behind an async RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use super::IngredientRepository;
use crate::database::DatabaseError;
use async_trait::async_trait;
use pantry_core::models::{Ingredient, IngredientId, NewIngredient};
use tokio::sync::RwLock;

/// Ordered, process-local ingredient storage
///
/// Writes take the lock, so concurrent add/delete calls serialize.
#[derive(Default)]
pub struct InMemoryIngredientRepository {
    ingredients: RwLock<Vec<Ingredient>>,
}

impl InMemoryIngredientRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn list(&self) -> Result<Vec<Ingredient>, DatabaseError> {
        Ok(self.ingredients.read().await.clone())
    }

    async fn create(&self, new: NewIngredient) -> Result<Ingredient, DatabaseError> {
        let ingredient = Ingredient::from_new(IngredientId::new(), new);
        self.ingredients.write().await.push(ingredient.clone());
        Ok(ingredient)
    }

    async fn delete(&self, id: IngredientId) -> Result<bool, DatabaseError> {
        let mut ingredients = self.ingredients.write().await;
        let before = ingredients.len();
        ingredients.retain(|ingredient| ingredient.id != id);
        Ok(ingredients.len() < before)
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, DatabaseError> {
        let mut ingredients = self.ingredients.write().await;
        let before = ingredients.len();
        ingredients.retain(|ingredient| !ingredient.name_matches(name));
        Ok((before - ingredients.len()) as u64)
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        Ok(self.ingredients.read().await.len() as u64)
    }
}

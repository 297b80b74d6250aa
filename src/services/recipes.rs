// ABOUTME: Recipe gateway turning the ingredient inventory into provider lookups
// ABOUTME: Projects provider responses into recipe summaries and recipe details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use crate::database::repositories::IngredientRepository;
use crate::external::{FoundRecipe, RecipeInformation, RecipeProvider};
use pantry_core::constants::{messages, recipes};
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{Nutrient, RecipeDetails, RecipeSummary};
use std::sync::Arc;
use tracing::debug;

/// Reduce a search match to the fields clients render
#[must_use]
pub fn summarize(found: FoundRecipe) -> RecipeSummary {
    RecipeSummary {
        id: found.id,
        title: found.title,
        image: found.image,
        used_ingredients: found.used_ingredients.into_iter().map(|i| i.name).collect(),
        missed_ingredients: found
            .missed_ingredients
            .into_iter()
            .map(|i| i.name)
            .collect(),
    }
}

/// Reduce recipe information to the fields clients render
#[must_use]
pub fn describe(information: RecipeInformation) -> RecipeDetails {
    RecipeDetails {
        title: information.title,
        image: information.image,
        instructions: information.instructions,
        ingredients: information
            .extended_ingredients
            .into_iter()
            .map(|i| i.original)
            .collect(),
        servings: information.servings,
        nutrition: information
            .nutrition
            .map(|n| {
                n.nutrients
                    .into_iter()
                    .map(|u| Nutrient {
                        name: u.name,
                        amount: u.amount,
                        unit: u.unit,
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Parse a recipe id path segment
///
/// # Errors
///
/// Returns a validation error unless `raw` is a positive integer
pub fn parse_recipe_id(raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid_input(messages::INVALID_RECIPE_ID))
}

/// Recipe suggestion and detail lookups
#[derive(Clone)]
pub struct RecipeGateway {
    repository: Arc<dyn IngredientRepository>,
    provider: Arc<dyn RecipeProvider>,
}

impl RecipeGateway {
    /// Create the gateway over an inventory and a recipe provider
    #[must_use]
    pub fn new(
        repository: Arc<dyn IngredientRepository>,
        provider: Arc<dyn RecipeProvider>,
    ) -> Self {
        Self {
            repository,
            provider,
        }
    }

    /// Suggest recipes for everything currently in the inventory
    ///
    /// # Errors
    ///
    /// Returns a precondition error for an empty inventory (no provider
    /// call is made), or a generic failure for store or provider errors
    pub async fn suggest(&self) -> AppResult<Vec<RecipeSummary>> {
        let ingredients = self
            .repository
            .list()
            .await
            .map_err(|e| AppError::database(messages::RECIPES_FETCH_FAILED, e))?;

        if ingredients.is_empty() {
            return Err(AppError::precondition(messages::NO_INGREDIENTS));
        }

        let query = ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(recipes::INGREDIENT_SEPARATOR);
        debug!(ingredients = %query, "Requesting recipe suggestions");

        let found = self
            .provider
            .find_by_ingredients(&query, recipes::SUGGESTION_COUNT)
            .await
            .map_err(|e| AppError::external_service(messages::RECIPES_FETCH_FAILED, e))?;

        Ok(found
            .into_iter()
            .take(recipes::SUGGESTION_COUNT as usize)
            .map(summarize)
            .collect())
    }

    /// Full details for one recipe
    ///
    /// # Errors
    ///
    /// Returns a generic failure for any provider error
    pub async fn detail(&self, id: u64) -> AppResult<RecipeDetails> {
        self.provider
            .recipe_information(id)
            .await
            .map(describe)
            .map_err(|e| AppError::external_service(messages::RECIPE_DETAILS_FETCH_FAILED, e))
    }
}

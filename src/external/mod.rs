// ABOUTME: External API client modules (Spoonacular recipe search)
// ABOUTME: Defines the RecipeProvider seam between the gateway service and HTTP clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! External API Clients
//!
//! This module contains clients for the third-party recipe database.

pub mod spoonacular_client;

// Re-export commonly used types
pub use spoonacular_client::{
    ExtendedIngredient, FoundRecipe, MockRecipeProvider, NutritionInfo, RecipeIngredient,
    RecipeInformation, SpoonacularClient, UpstreamNutrient,
};

use async_trait::async_trait;
use pantry_core::errors::RecipeApiError;

/// A call made to a recipe provider, as recorded by test doubles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    /// Search by comma-joined ingredient names
    FindByIngredients {
        /// Query value sent upstream
        ingredients: String,
        /// Requested number of matches
        number: u32,
    },
    /// Information lookup for one recipe
    RecipeInformation {
        /// Recipe id
        id: u64,
    },
}

/// Source of recipe matches and recipe information
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Recipes that use the given comma-separated ingredients
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<FoundRecipe>, RecipeApiError>;

    /// Full information for one recipe
    async fn recipe_information(&self, id: u64) -> Result<RecipeInformation, RecipeApiError>;
}

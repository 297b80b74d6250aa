// ABOUTME: Core data models for the pantry recipe server
// ABOUTME: Ingredient records (persisted) and recipe projections (derived per request)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

/// Stored ingredient records
pub mod ingredient;
/// Recipe summaries and details projected from the provider
pub mod recipe;

pub use ingredient::{Ingredient, IngredientId, NewIngredient};
pub use recipe::{Nutrient, RecipeDetails, RecipeSummary};

// ABOUTME: Recipe summary and detail shapes returned to clients
// ABOUTME: Reduced projections of provider responses, rebuilt on every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use serde::{Deserialize, Serialize};

/// One search match, reduced to what the client renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Provider recipe id
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Image URL
    pub image: Option<String>,
    /// Names of stored ingredients the recipe uses
    pub used_ingredients: Vec<String>,
    /// Names of ingredients the recipe needs but the inventory lacks
    pub missed_ingredients: Vec<String>,
}

/// One nutrient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    /// Nutrient name (e.g. "Calories")
    pub name: String,
    /// Amount per serving
    pub amount: f64,
    /// Unit of `amount`
    pub unit: String,
}

/// Full recipe information, reduced to what the client renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetails {
    /// Recipe title
    pub title: String,
    /// Image URL
    pub image: Option<String>,
    /// Free-text instructions
    pub instructions: Option<String>,
    /// Ingredient lines as written in the recipe
    pub ingredients: Vec<String>,
    /// Number of servings
    pub servings: Option<u32>,
    /// Nutrients per serving; empty when the provider sent none
    pub nutrition: Vec<Nutrient>,
}

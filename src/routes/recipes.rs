// ABOUTME: Route handlers for recipe suggestions and recipe details
// ABOUTME: Delegates to the recipe gateway and wraps results in the client's response keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use crate::resources::ServerResources;
use crate::services::recipes::parse_recipe_id;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use pantry_core::errors::AppError;
use pantry_core::models::{RecipeDetails, RecipeSummary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response for recipe suggestions
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeListResponse {
    /// At most five matches for the current inventory
    pub recipes: Vec<RecipeSummary>,
}

/// Response for one recipe's details
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailsResponse {
    /// Projected recipe information
    pub recipe_details: RecipeDetails,
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipes", get(Self::handle_suggest))
            .route("/recipes/:id", get(Self::handle_detail))
            .with_state(resources)
    }

    async fn handle_suggest(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<RecipeListResponse>, AppError> {
        let recipes = resources.recipes.suggest().await?;
        Ok(Json(RecipeListResponse { recipes }))
    }

    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Json<RecipeDetailsResponse>, AppError> {
        let id = parse_recipe_id(&id)?;
        let recipe_details = resources.recipes.detail(id).await?;
        Ok(Json(RecipeDetailsResponse { recipe_details }))
    }
}

// ABOUTME: Route handlers for the ingredient inventory REST API
// ABOUTME: List, add, delete by id, and delete by name over the inventory service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! Ingredient routes
//!
//! Handlers extract request data, call one `InventoryService` operation, and
//! wrap the result. Validation lives in the service layer.

use crate::resources::ServerResources;
use crate::services::inventory::parse_new_ingredient;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get},
    Json, Router,
};
use pantry_core::constants::messages;
use pantry_core::errors::{AppError, MessageResponse};
use pantry_core::models::Ingredient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Response for listing the inventory
#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientListResponse {
    /// Every stored record in storage order
    pub ingredients: Vec<Ingredient>,
}

/// Response for a stored ingredient
#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientCreatedResponse {
    /// Acknowledgement text
    pub message: String,
    /// The record as stored, including its identifier
    pub ingredient: Ingredient,
}

/// Response for a delete by name
#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientsDeletedResponse {
    /// Acknowledgement text
    pub message: String,
    /// Number of records removed
    pub deleted: u64,
}

/// Ingredient routes implementation
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/ingredients",
                get(Self::handle_list).post(Self::handle_add),
            )
            .route("/ingredients/:id", delete(Self::handle_delete))
            .route(
                "/ingredients/name/:name",
                delete(Self::handle_delete_by_name),
            )
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<IngredientListResponse>, AppError> {
        let ingredients = resources.inventory.list().await?;
        Ok(Json(IngredientListResponse { ingredients }))
    }

    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<serde_json::Value>, JsonRejection>,
    ) -> Result<Json<IngredientCreatedResponse>, AppError> {
        let Json(payload) = payload.map_err(|rejection| {
            debug!("Rejected ingredient body: {rejection}");
            AppError::invalid_input(messages::INVALID_JSON_BODY)
        })?;

        let new = parse_new_ingredient(&payload)?;
        let ingredient = resources.inventory.add(new).await?;

        Ok(Json(IngredientCreatedResponse {
            message: messages::INGREDIENT_ADDED.to_owned(),
            ingredient,
        }))
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Json<MessageResponse>, AppError> {
        resources.inventory.delete(&id).await?;
        Ok(Json(MessageResponse::new(messages::INGREDIENT_DELETED)))
    }

    async fn handle_delete_by_name(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
    ) -> Result<Json<IngredientsDeletedResponse>, AppError> {
        let deleted = resources.inventory.delete_by_name(&name).await?;
        Ok(Json(IngredientsDeletedResponse {
            message: messages::INGREDIENT_DELETED.to_owned(),
            deleted,
        }))
    }
}

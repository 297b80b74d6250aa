// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Holds the inventory service, recipe gateway, and server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! # Server Resources
//!
//! Built once at startup and shared with every router through
//! `Arc<ServerResources>`. Tests build the same container over the in-memory
//! repository and the mock recipe provider.

use crate::config::ServerConfig;
use crate::database::repositories::IngredientRepository;
use crate::external::RecipeProvider;
use crate::services::{InventoryService, RecipeGateway};
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Ingredient inventory operations
    pub inventory: InventoryService,
    /// Recipe lookups
    pub recipes: RecipeGateway,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire both services over one repository and one recipe provider
    #[must_use]
    pub fn new(
        repository: Arc<dyn IngredientRepository>,
        provider: Arc<dyn RecipeProvider>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            inventory: InventoryService::new(Arc::clone(&repository)),
            recipes: RecipeGateway::new(repository, provider),
            config,
        }
    }
}

// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Inventory CRUD and recipe gateway operations, independent of HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! Domain service layer
//!
//! Route handlers stay thin: they extract request data, call one service
//! operation, and wrap the result in a response body.

/// Ingredient inventory operations
pub mod inventory;

/// Recipe suggestions and details from the external provider
pub mod recipes;

pub use inventory::InventoryService;
pub use recipes::RecipeGateway;

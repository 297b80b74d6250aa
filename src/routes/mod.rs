// ABOUTME: Route module organization for the pantry recipe server HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers over services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! Route module
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and liveness routes
pub mod health;
/// Ingredient inventory routes
pub mod ingredients;
/// Recipe suggestion and detail routes
pub mod recipes;

pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use recipes::RecipeRoutes;

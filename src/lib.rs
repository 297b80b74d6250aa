// ABOUTME: Main library entry point for the pantry recipe server
// ABOUTME: Ingredient inventory REST API with recipe suggestions from Spoonacular
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

#![deny(unsafe_code)]

//! # Pantry Recipe Server
//!
//! A small HTTP backend that keeps a list of ingredients on hand (each with
//! an optional expiry date) and asks Spoonacular which recipes can be made
//! from them.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers, one router per domain
//! - **Services**: inventory validation and the recipe gateway
//! - **Database**: `SQLite` storage behind the `IngredientRepository` trait,
//!   with an in-memory implementation for tests
//! - **External**: the Spoonacular client behind the `RecipeProvider` trait
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_recipe_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pantry server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Ingredient storage and repositories
pub mod database;

/// External recipe provider clients
pub mod external;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids)
pub mod middleware;

/// Shared resources injected into routers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Domain services
pub mod services;

pub use pantry_core::constants;
pub use pantry_core::errors;
pub use pantry_core::models;

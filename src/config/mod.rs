// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration for port, database, recipe API, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! Configuration module
//!
//! All settings come from environment variables; command-line flags on the
//! binary may override the port and database location.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, DatabaseConfig, DatabaseUrl, Environment, RecipeApiConfig, ServerConfig,
};

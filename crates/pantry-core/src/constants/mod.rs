// ABOUTME: Constants module with domain-separated organization
// ABOUTME: User-facing messages, defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Messages returned to HTTP callers
///
/// These are the only error texts a caller ever sees; upstream and storage
/// details stay in the server log.
pub mod messages {
    /// Liveness text served on `/`
    pub const LIVENESS: &str = "Backend is running!";
    /// Acknowledgement for a stored ingredient
    pub const INGREDIENT_ADDED: &str = "Ingredient added!";
    /// Acknowledgement for a removed ingredient
    pub const INGREDIENT_DELETED: &str = "Ingredient deleted!";
    /// Delete target absent
    pub const INGREDIENT_NOT_FOUND: &str = "Ingredient not found.";
    /// Missing or non-text ingredient name
    pub const INGREDIENT_NAME_REQUIRED: &str =
        "Ingredient name is required and must be a string.";
    /// Unparseable expiry date
    pub const INVALID_EXPIRY_DATE: &str =
        "Expiry date must be a date (YYYY-MM-DD) or RFC 3339 timestamp.";
    /// Body could not be read as JSON
    pub const INVALID_JSON_BODY: &str = "Request body must be valid JSON.";
    /// Store unavailable while listing
    pub const INGREDIENTS_FETCH_FAILED: &str = "Failed to retrieve ingredients.";
    /// Store unavailable while adding
    pub const INGREDIENT_ADD_FAILED: &str = "Failed to add ingredient.";
    /// Store unavailable while deleting
    pub const INGREDIENT_DELETE_FAILED: &str = "Failed to delete ingredient.";
    /// Suggestion requested with an empty inventory
    pub const NO_INGREDIENTS: &str = "No ingredients available to suggest recipes.";
    /// Generic suggestion failure
    pub const RECIPES_FETCH_FAILED: &str = "Failed to fetch recipes.";
    /// Generic detail failure
    pub const RECIPE_DETAILS_FETCH_FAILED: &str = "Failed to fetch recipe details.";
    /// Recipe id path segment is not a positive integer
    pub const INVALID_RECIPE_ID: &str = "Recipe id must be a positive integer.";
}

/// Recipe lookup constants
pub mod recipes {
    /// Number of matches requested from find-by-ingredients
    pub const SUGGESTION_COUNT: u32 = 5;
    /// Separator used to join ingredient names into one query value
    pub const INGREDIENT_SEPARATOR: &str = ",";
    /// Provider name used in logs and error details
    pub const PROVIDER_NAME: &str = "Spoonacular";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/pantry.db";
    /// Default Spoonacular API base URL
    pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
    /// Allow every origin unless configured otherwise
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment variable names
pub mod env_vars {
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Spoonacular API key
    pub const SPOONACULAR_API_KEY: &str = "SPOONACULAR_API_KEY";
    /// Spoonacular base URL override
    pub const SPOONACULAR_BASE_URL: &str = "SPOONACULAR_BASE_URL";
    /// Whether recipe details request nutrition data
    pub const SPOONACULAR_INCLUDE_NUTRITION: &str = "SPOONACULAR_INCLUDE_NUTRITION";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity for structured logging
pub mod service_names {
    /// Binary and log service name
    pub const PANTRY_RECIPE_SERVER: &str = "pantry-recipe-server";
}

// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds routers over the in-memory repository, SQLite, and the mock recipe provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pantry_recipe_server`

use anyhow::Result;
use pantry_recipe_server::{
    config::{
        CorsConfig, DatabaseConfig, DatabaseUrl, Environment, RecipeApiConfig, ServerConfig,
    },
    database::{
        repositories::{IngredientRepository, IngredientRepositoryImpl, InMemoryIngredientRepository},
        Database,
    },
    external::{
        ExtendedIngredient, FoundRecipe, MockRecipeProvider, NutritionInfo, RecipeIngredient,
        RecipeInformation, RecipeProvider, UpstreamNutrient,
    },
    resources::ServerResources,
    server::build_router,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration that never touches the environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".to_owned(),
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        recipe_api: RecipeApiConfig {
            api_key: "test-api-key".to_owned(),
            base_url: "http://127.0.0.1:9".to_owned(),
            include_nutrition: true,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

/// Full application router over the given repository and provider
pub fn app(
    repository: Arc<dyn IngredientRepository>,
    provider: Arc<dyn RecipeProvider>,
) -> axum::Router {
    init_test_logging();
    let config = Arc::new(test_config());
    let resources = Arc::new(ServerResources::new(
        repository,
        provider,
        Arc::clone(&config),
    ));
    build_router(resources, &config)
}

/// Empty in-memory inventory with a provider that returns nothing
pub fn memory_app() -> (
    axum::Router,
    Arc<InMemoryIngredientRepository>,
    Arc<MockRecipeProvider>,
) {
    memory_app_with(MockRecipeProvider::new())
}

/// Empty in-memory inventory over the given provider
pub fn memory_app_with(
    provider: MockRecipeProvider,
) -> (
    axum::Router,
    Arc<InMemoryIngredientRepository>,
    Arc<MockRecipeProvider>,
) {
    let repository = Arc::new(InMemoryIngredientRepository::new());
    let provider = Arc::new(provider);
    let router = app(repository.clone(), provider.clone());
    (router, repository, provider)
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new(&DatabaseUrl::Memory).await?)
}

/// Application router over an in-memory `SQLite` database
pub async fn sqlite_app() -> Result<(axum::Router, Database)> {
    let (router, database, _) = sqlite_app_with_provider().await?;
    Ok((router, database))
}

/// Application router over an in-memory `SQLite` database, keeping the provider
pub async fn sqlite_app_with_provider(
) -> Result<(axum::Router, Database, Arc<MockRecipeProvider>)> {
    let database = create_test_database().await?;
    let repository = Arc::new(IngredientRepositoryImpl::new(database.clone()));
    let provider = Arc::new(MockRecipeProvider::new());
    let router = app(repository, provider.clone());
    Ok((router, database, provider))
}

/// Search match fixture
pub fn found_recipe(id: u64, title: &str, used: &[&str], missed: &[&str]) -> FoundRecipe {
    let to_ingredients = |names: &[&str]| {
        names
            .iter()
            .map(|name| RecipeIngredient {
                name: (*name).to_owned(),
                original: None,
            })
            .collect()
    };

    FoundRecipe {
        id,
        title: title.to_owned(),
        image: Some(format!("https://img.spoonacular.com/recipes/{id}-312x231.jpg")),
        used_ingredients: to_ingredients(used),
        missed_ingredients: to_ingredients(missed),
    }
}

/// Recipe information fixture with one nutrient
pub fn recipe_information(title: &str) -> RecipeInformation {
    RecipeInformation {
        title: title.to_owned(),
        image: None,
        instructions: Some("Whisk and cook.".to_owned()),
        extended_ingredients: vec![
            ExtendedIngredient {
                original: "2 eggs".to_owned(),
            },
            ExtendedIngredient {
                original: "1/4 cup milk".to_owned(),
            },
        ],
        servings: Some(1),
        nutrition: Some(NutritionInfo {
            nutrients: vec![UpstreamNutrient {
                name: "Calories".to_owned(),
                amount: 210.0,
                unit: "kcal".to_owned(),
            }],
        }),
    }
}

// ABOUTME: Server binary for the pantry recipe API
// ABOUTME: Loads configuration, opens the ingredient store, and serves the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! # Pantry Recipe Server Binary
//!
//! Starts the ingredient inventory API backed by `SQLite` with recipe
//! suggestions from Spoonacular.

use anyhow::Result;
use clap::Parser;
use pantry_recipe_server::{
    config::{DatabaseUrl, ServerConfig},
    database::{repositories::IngredientRepositoryImpl, Database},
    external::SpoonacularClient,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pantry-recipe-server")]
#[command(about = "Pantry Recipe Server - ingredient inventory with recipe suggestions")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./data/pantry.db` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }

    logging::init_from_env()?;

    info!("Starting Pantry Recipe Server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized successfully: {}", config.database.url);

    let repository = Arc::new(IngredientRepositoryImpl::new(database.clone()));
    let provider = Arc::new(SpoonacularClient::new(&config.recipe_api));
    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::new(
        repository,
        provider,
        Arc::clone(&config),
    ));

    let router = server::build_router(resources, &config);

    display_available_endpoints(&config);

    let result = server::run(router, &config.host, config.http_port).await;
    database.close().await;

    if let Err(e) = result {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:          GET    http://{host}:{port}/");
    info!("   Health:            GET    http://{host}:{port}/health");
    info!("   Readiness:         GET    http://{host}:{port}/ready");
    info!("Ingredients:");
    info!("   List:              GET    http://{host}:{port}/ingredients");
    info!("   Add:               POST   http://{host}:{port}/ingredients");
    info!("   Delete:            DELETE http://{host}:{port}/ingredients/{{id}}");
    info!("   Delete by name:    DELETE http://{host}:{port}/ingredients/name/{{name}}");
    info!("Recipes:");
    info!("   Suggestions:       GET    http://{host}:{port}/recipes");
    info!("   Details:           GET    http://{host}:{port}/recipes/{{id}}");
    info!("=== End of Endpoint List ===");
}

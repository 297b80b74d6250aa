// ABOUTME: Spoonacular API client for recipe search by ingredients and recipe information
// ABOUTME: Single-attempt HTTP calls with upstream DTOs and a mock provider for testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! Spoonacular API Client
//!
//! Two endpoints are used:
//! - `GET /recipes/findByIngredients` to match recipes against the inventory
//! - `GET /recipes/{id}/information` for one recipe's full details
//!
//! Every call is a single attempt: no retry, no backoff, no timeout beyond
//! what the HTTP stack imposes. The API key travels as the `apiKey` query
//! parameter and is stripped from transport errors before they are logged.
//!
//! # API Reference
//! <https://spoonacular.com/food-api/docs>

use super::{ProviderCall, RecipeProvider};
use crate::config::RecipeApiConfig;
use crate::logging::log_provider_call;
use async_trait::async_trait;
use pantry_core::constants::recipes::PROVIDER_NAME;
use pantry_core::errors::RecipeApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::Mutex;

/// One ingredient reference inside a search match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name
    pub name: String,
    /// Ingredient line as written in the recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

/// One entry of a find-by-ingredients response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundRecipe {
    /// Recipe id
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Stored ingredients the recipe uses
    #[serde(default)]
    pub used_ingredients: Vec<RecipeIngredient>,
    /// Ingredients the recipe needs that were not in the query
    #[serde(default)]
    pub missed_ingredients: Vec<RecipeIngredient>,
}

/// Ingredient entry of a recipe information response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedIngredient {
    /// Ingredient line as written in the recipe
    pub original: String,
}

/// Nutrient entry of a recipe information response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamNutrient {
    /// Nutrient name
    pub name: String,
    /// Amount per serving
    pub amount: f64,
    /// Unit of `amount`
    pub unit: String,
}

/// Nutrition block, present only when requested and available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    /// Nutrients per serving
    #[serde(default)]
    pub nutrients: Vec<UpstreamNutrient>,
}

/// Recipe information response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    /// Recipe title
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Free-text instructions
    #[serde(default)]
    pub instructions: Option<String>,
    /// Ingredient lines
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    /// Number of servings
    #[serde(default)]
    pub servings: Option<u32>,
    /// Nutrition block
    #[serde(default)]
    pub nutrition: Option<NutritionInfo>,
}

/// Spoonacular API Client
pub struct SpoonacularClient {
    api_key: String,
    base_url: String,
    include_nutrition: bool,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a new client from configuration
    #[must_use]
    pub fn new(config: &RecipeApiConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client around an existing `reqwest::Client`
    #[must_use]
    pub fn with_http_client(config: &RecipeApiConfig, http_client: reqwest::Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            include_nutrition: config.include_nutrition,
            http_client,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RecipeApiError> {
        let response = self
            .http_client
            .get(url)
            .query(query)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| RecipeApiError::Request {
                provider: PROVIDER_NAME,
                source: e.without_url(),
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| RecipeApiError::Request {
            provider: PROVIDER_NAME,
            source: e.without_url(),
        })?;

        if !status.is_success() {
            return Err(RecipeApiError::Status {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| RecipeApiError::Decode {
            provider: PROVIDER_NAME,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<FoundRecipe>, RecipeApiError> {
        let url = format!("{}/recipes/findByIngredients", self.base_url);
        let number = number.to_string();

        let started = Instant::now();
        let result = self
            .get_json(
                &url,
                &[("ingredients", ingredients), ("number", number.as_str())],
            )
            .await;
        log_provider_call(
            PROVIDER_NAME,
            "findByIngredients",
            started.elapsed(),
            result.is_ok(),
        );
        result
    }

    async fn recipe_information(&self, id: u64) -> Result<RecipeInformation, RecipeApiError> {
        let url = format!("{}/recipes/{id}/information", self.base_url);
        let query: &[(&str, &str)] = if self.include_nutrition {
            &[("includeNutrition", "true")]
        } else {
            &[]
        };

        let started = Instant::now();
        let result = self.get_json(&url, query).await;
        log_provider_call(PROVIDER_NAME, "information", started.elapsed(), result.is_ok());
        result
    }
}

/// Mock recipe provider for testing (no API calls)
///
/// Returns configured data, or a configured failure for every call, and
/// records each call so tests can assert on what was sent upstream.
#[derive(Default)]
pub struct MockRecipeProvider {
    matches: Vec<FoundRecipe>,
    details: HashMap<u64, RecipeInformation>,
    failure: Option<String>,
    calls: Mutex<Vec<ProviderCall>>,
}

impl MockRecipeProvider {
    /// Provider with no data; searches return an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose searches return `matches`
    #[must_use]
    pub fn with_matches(mut self, matches: Vec<FoundRecipe>) -> Self {
        self.matches = matches;
        self
    }

    /// Provider that knows the information for `id`
    #[must_use]
    pub fn with_details(mut self, id: u64, information: RecipeInformation) -> Self {
        self.details.insert(id, information);
        self
    }

    /// Provider whose every call fails with `reason`
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Calls received so far, in order
    pub async fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().await.clone()
    }

    fn check_failure(&self) -> Result<(), RecipeApiError> {
        self.failure.as_ref().map_or(Ok(()), |reason| {
            Err(RecipeApiError::Unavailable {
                provider: PROVIDER_NAME,
                reason: reason.clone(),
            })
        })
    }
}

#[async_trait]
impl RecipeProvider for MockRecipeProvider {
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: u32,
    ) -> Result<Vec<FoundRecipe>, RecipeApiError> {
        self.calls.lock().await.push(ProviderCall::FindByIngredients {
            ingredients: ingredients.to_owned(),
            number,
        });
        self.check_failure()?;
        Ok(self.matches.clone())
    }

    async fn recipe_information(&self, id: u64) -> Result<RecipeInformation, RecipeApiError> {
        self.calls
            .lock()
            .await
            .push(ProviderCall::RecipeInformation { id });
        self.check_failure()?;
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| RecipeApiError::Status {
                provider: PROVIDER_NAME,
                status: 404,
                body: format!("recipe {id} not found"),
            })
    }
}

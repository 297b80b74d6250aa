// ABOUTME: HTTP integration tests for recipe suggestion and recipe detail routes
// ABOUTME: Uses the mock recipe provider to assert on upstream calls and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{found_recipe, recipe_information};
use helpers::axum_test::AxumTestRequest;
use pantry_recipe_server::database::repositories::IngredientRepository;
use pantry_recipe_server::external::{MockRecipeProvider, ProviderCall};
use pantry_recipe_server::models::NewIngredient;
use serde_json::{json, Value};

async fn stock(
    repository: &dyn IngredientRepository,
    names: &[&str],
) {
    for name in names {
        repository
            .create(NewIngredient::new(*name, None).unwrap())
            .await
            .unwrap();
    }
}

// ============================================================================
// GET /recipes
// ============================================================================

#[tokio::test]
async fn test_suggest_with_empty_inventory_skips_provider() {
    let (app, _, provider) = common::memory_app();

    let response = AxumTestRequest::get("/recipes").send(app).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "message": "No ingredients available to suggest recipes." })
    );
    assert!(provider.calls().await.is_empty());
}

#[tokio::test]
async fn test_suggest_sends_comma_joined_names_in_storage_order() {
    let (app, repository, provider) = common::memory_app_with(
        MockRecipeProvider::new().with_matches(vec![found_recipe(
            1,
            "Omelette",
            &["eggs", "milk"],
            &["chives"],
        )]),
    );
    stock(&*repository, &["eggs", "milk", "cheese"]).await;

    let response = AxumTestRequest::get("/recipes").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        provider.calls().await,
        vec![ProviderCall::FindByIngredients {
            ingredients: "eggs,milk,cheese".to_owned(),
            number: 5,
        }]
    );

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "recipes": [{
                "id": 1,
                "title": "Omelette",
                "image": "https://img.spoonacular.com/recipes/1-312x231.jpg",
                "usedIngredients": ["eggs", "milk"],
                "missedIngredients": ["chives"]
            }]
        })
    );
}

#[tokio::test]
async fn test_suggest_returns_at_most_five_recipes() {
    let matches = (1..=8)
        .map(|id| found_recipe(id, &format!("Recipe {id}"), &["rice"], &[]))
        .collect();
    let (app, repository, _) =
        common::memory_app_with(MockRecipeProvider::new().with_matches(matches));
    stock(&*repository, &["rice"]).await;

    let body: Value = AxumTestRequest::get("/recipes").send(app).await.json();

    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 5);
    assert_eq!(recipes[0]["id"], 1);
    assert_eq!(recipes[4]["id"], 5);
}

#[tokio::test]
async fn test_suggest_with_no_matches_returns_empty_list() {
    let (app, repository, _) = common::memory_app();
    stock(&*repository, &["saffron"]).await;

    let response = AxumTestRequest::get("/recipes").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({ "recipes": [] }));
}

#[tokio::test]
async fn test_suggest_provider_failure_is_generic() {
    let (app, repository, _) = common::memory_app_with(MockRecipeProvider::failing(
        "HTTP 402: daily points limit of 150 has been reached",
    ));
    stock(&*repository, &["eggs"]).await;

    let response = AxumTestRequest::get("/recipes").send(app).await;

    assert_eq!(response.status(), 500);
    let text = response.text();
    assert!(!text.contains("402"));
    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body, json!({ "message": "Failed to fetch recipes." }));
}

#[tokio::test]
async fn test_suggest_store_failure_is_generic_and_skips_provider() {
    let (app, database, provider) = common::sqlite_app_with_provider().await.unwrap();
    database
        .create_ingredient(NewIngredient::new("eggs", None).unwrap())
        .await
        .unwrap();
    database.close().await;

    let response = AxumTestRequest::get("/recipes").send(app).await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Failed to fetch recipes." }));
    assert!(provider.calls().await.is_empty());
}

// ============================================================================
// GET /recipes/:id
// ============================================================================

#[tokio::test]
async fn test_detail_projects_recipe_information() {
    let (app, _, provider) = common::memory_app_with(
        MockRecipeProvider::new().with_details(716_429, recipe_information("Egg Scramble")),
    );

    let response = AxumTestRequest::get("/recipes/716429").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        provider.calls().await,
        vec![ProviderCall::RecipeInformation { id: 716_429 }]
    );

    let body: Value = response.json();
    let details = &body["recipeDetails"];
    assert_eq!(details["title"], "Egg Scramble");
    assert_eq!(details["instructions"], "Whisk and cook.");
    assert_eq!(details["ingredients"], json!(["2 eggs", "1/4 cup milk"]));
    assert_eq!(details["servings"], 1);
    assert_eq!(
        details["nutrition"],
        json!([{ "name": "Calories", "amount": 210.0, "unit": "kcal" }])
    );
}

#[tokio::test]
async fn test_detail_does_not_require_inventory() {
    let (app, repository, _) = common::memory_app_with(
        MockRecipeProvider::new().with_details(42, recipe_information("Pancakes")),
    );
    assert!(repository.list().await.unwrap().is_empty());

    let response = AxumTestRequest::get("/recipes/42").send(app).await;

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_detail_unknown_recipe_is_generic_failure() {
    let (app, _, _) = common::memory_app();

    let response = AxumTestRequest::get("/recipes/999999").send(app).await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Failed to fetch recipe details." }));
}

#[tokio::test]
async fn test_detail_rejects_non_numeric_id_without_provider_call() {
    let (app, _, provider) = common::memory_app();

    for uri in ["/recipes/pasta", "/recipes/0", "/recipes/-4"] {
        let response = AxumTestRequest::get(uri).send(app.clone()).await;
        assert_eq!(response.status(), 400, "uri {uri}");
        let body: Value = response.json();
        assert_eq!(body["message"], "Recipe id must be a positive integer.");
    }

    assert!(provider.calls().await.is_empty());
}

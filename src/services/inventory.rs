// ABOUTME: Inventory service for listing, adding, and deleting ingredient records
// ABOUTME: Validates client payloads and maps storage failures to caller-facing errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use crate::database::repositories::IngredientRepository;
use chrono::{DateTime, NaiveDate, Utc};
use pantry_core::constants::messages;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{Ingredient, IngredientId, NewIngredient};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Build a validated `NewIngredient` from a JSON request body
///
/// The name is read from `name`, falling back to the legacy `ingredient`
/// key. `expiryDate` may be absent, `null`, an empty string, a `YYYY-MM-DD`
/// date (midnight UTC), or an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns a validation error when the name is missing, not a string, or
/// blank, or when the expiry date cannot be parsed
pub fn parse_new_ingredient(payload: &Value) -> AppResult<NewIngredient> {
    let name = payload
        .get("name")
        .or_else(|| payload.get("ingredient"))
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::missing_field(messages::INGREDIENT_NAME_REQUIRED))?;

    let expiry_date = match payload.get("expiryDate") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => parse_expiry_date(raw)?,
        Some(_) => return Err(AppError::invalid_format(messages::INVALID_EXPIRY_DATE)),
    };

    NewIngredient::new(name, expiry_date)
}

fn parse_expiry_date(raw: &str) -> AppResult<Option<DateTime<Utc>>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| AppError::invalid_format(messages::INVALID_EXPIRY_DATE))
}

/// Inventory operations over an injected repository
#[derive(Clone)]
pub struct InventoryService {
    repository: Arc<dyn IngredientRepository>,
}

impl InventoryService {
    /// Create the service over a repository
    #[must_use]
    pub fn new(repository: Arc<dyn IngredientRepository>) -> Self {
        Self { repository }
    }

    /// All stored records in storage order
    ///
    /// # Errors
    ///
    /// Returns a database error if the store is unavailable
    pub async fn list(&self) -> AppResult<Vec<Ingredient>> {
        self.repository
            .list()
            .await
            .map_err(|e| AppError::database(messages::INGREDIENTS_FETCH_FAILED, e))
    }

    /// Persist a validated ingredient and return the stored record
    ///
    /// # Errors
    ///
    /// Returns a database error if the store is unavailable
    pub async fn add(&self, new: NewIngredient) -> AppResult<Ingredient> {
        let ingredient = self
            .repository
            .create(new)
            .await
            .map_err(|e| AppError::database(messages::INGREDIENT_ADD_FAILED, e))?;

        info!(ingredient_id = %ingredient.id, name = %ingredient.name, "Ingredient added");
        Ok(ingredient)
    }

    /// Delete by store identifier
    ///
    /// An identifier that does not parse cannot match any record and is
    /// reported as not found.
    ///
    /// # Errors
    ///
    /// Returns not-found when nothing matched, or a database error
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let Ok(id) = id.parse::<IngredientId>() else {
            return Err(AppError::not_found(messages::INGREDIENT_NOT_FOUND));
        };

        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(|e| AppError::database(messages::INGREDIENT_DELETE_FAILED, e))?;

        if !removed {
            return Err(AppError::not_found(messages::INGREDIENT_NOT_FOUND));
        }

        info!(ingredient_id = %id, "Ingredient deleted");
        Ok(())
    }

    /// Delete every record whose name equals `name` ignoring case
    ///
    /// # Errors
    ///
    /// Returns not-found when nothing matched, or a database error
    pub async fn delete_by_name(&self, name: &str) -> AppResult<u64> {
        let removed = self
            .repository
            .delete_by_name(name)
            .await
            .map_err(|e| AppError::database(messages::INGREDIENT_DELETE_FAILED, e))?;

        if removed == 0 {
            return Err(AppError::not_found(messages::INGREDIENT_NOT_FOUND));
        }

        info!(name = %name, removed, "Ingredients deleted by name");
        Ok(removed)
    }

    /// Whether the store answers queries
    ///
    /// # Errors
    ///
    /// Returns an unavailable error when the store cannot be reached
    pub async fn check_ready(&self) -> AppResult<()> {
        self.repository
            .count()
            .await
            .map(|_| ())
            .map_err(|e| AppError::unavailable("Ingredient store unavailable.").with_details(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_accepts_name_and_date() {
        let new = parse_new_ingredient(&json!({"name": "Milk", "expiryDate": "2026-10-20"}))
            .unwrap();
        assert_eq!(new.name(), "Milk");
        assert_eq!(
            new.expiry_date().unwrap().to_rfc3339(),
            "2026-10-20T00:00:00+00:00"
        );
    }

    #[test]
    fn test_parse_accepts_legacy_ingredient_key() {
        let new = parse_new_ingredient(&json!({"ingredient": "eggs"})).unwrap();
        assert_eq!(new.name(), "eggs");
        assert!(new.expiry_date().is_none());
    }

    #[test]
    fn test_parse_treats_empty_expiry_as_absent() {
        let new = parse_new_ingredient(&json!({"name": "Cheese", "expiryDate": ""})).unwrap();
        assert!(new.expiry_date().is_none());
    }

    #[test]
    fn test_parse_accepts_rfc3339_expiry() {
        let new =
            parse_new_ingredient(&json!({"name": "Yogurt", "expiryDate": "2026-10-20T08:30:00+02:00"}))
                .unwrap();
        assert_eq!(
            new.expiry_date().unwrap().to_rfc3339(),
            "2026-10-20T06:30:00+00:00"
        );
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        for payload in [
            json!({}),
            json!({"name": 42}),
            json!({"name": null}),
            json!({"name": ["milk"]}),
            json!({"name": "   "}),
            json!("milk"),
        ] {
            let err = parse_new_ingredient(&payload).unwrap_err();
            assert_eq!(err.http_status(), 400, "payload {payload}");
            assert_eq!(err.message, messages::INGREDIENT_NAME_REQUIRED);
        }
    }

    #[test]
    fn test_parse_rejects_bad_expiry() {
        for payload in [
            json!({"name": "Milk", "expiryDate": "next tuesday"}),
            json!({"name": "Milk", "expiryDate": 20_261_020}),
        ] {
            let err = parse_new_ingredient(&payload).unwrap_err();
            assert_eq!(err.http_status(), 400);
            assert_eq!(err.message, messages::INVALID_EXPIRY_DATE);
        }
    }
}

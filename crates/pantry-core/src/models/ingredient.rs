// ABOUTME: Ingredient record model with store-assigned identifier and optional expiry
// ABOUTME: Validated NewIngredient input guarantees stored names are never blank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Store-assigned identifier of an ingredient record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(Uuid);

impl IngredientId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IngredientId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for IngredientId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for IngredientId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One stored inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identifier assigned on creation
    #[serde(rename = "_id")]
    pub id: IngredientId,
    /// Non-empty display name
    pub name: String,
    /// When the item goes off, if known
    #[serde(
        rename = "expiryDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl Ingredient {
    /// Materialize a stored record from validated input
    #[must_use]
    pub fn from_new(id: IngredientId, new: NewIngredient) -> Self {
        Self {
            id,
            name: new.name,
            expiry_date: new.expiry_date,
        }
    }

    /// Case-insensitive exact name comparison
    #[must_use]
    pub fn name_matches(&self, target: &str) -> bool {
        self.name.to_lowercase() == target.to_lowercase()
    }
}

/// Validated input for creating an ingredient record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    name: String,
    expiry_date: Option<DateTime<Utc>>,
}

impl NewIngredient {
    /// Validate a name and optional expiry date
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty after trimming
    pub fn new(name: impl Into<String>, expiry_date: Option<DateTime<Utc>>) -> AppResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input(messages::INGREDIENT_NAME_REQUIRED));
        }

        Ok(Self {
            name: trimmed.to_owned(),
            expiry_date,
        })
    }

    /// Validated name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expiry date, if given
    #[must_use]
    pub const fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.expiry_date
    }
}

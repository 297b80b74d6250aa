// ABOUTME: Error types for calls to the external recipe provider
// ABOUTME: Distinguishes transport, HTTP status, and decoding failures for logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

use thiserror::Error;

/// Failure of a single recipe provider call
#[derive(Debug, Error)]
pub enum RecipeApiError {
    /// The request never produced a response
    #[error("request to {provider} failed: {source}")]
    Request {
        /// Provider name
        provider: &'static str,
        /// Transport error
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status
    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        /// Provider name
        provider: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// The response body did not match the expected shape
    #[error("{provider} response could not be decoded: {reason}")]
    Decode {
        /// Provider name
        provider: &'static str,
        /// Decoder message
        reason: String,
    },

    /// The provider is not reachable for another reason
    #[error("{provider} unavailable: {reason}")]
    Unavailable {
        /// Provider name
        provider: &'static str,
        /// Why
        reason: String,
    },
}

// ABOUTME: HTTP middleware for request correlation and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

/// CORS configuration
pub mod cors;
/// Request ID propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};

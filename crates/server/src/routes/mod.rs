//! API route handlers
//!
//! - `health`: liveness and readiness
//! - `strings`: create, fetch, list and delete analyzed strings

pub mod health;
pub mod strings;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "String Analyzer",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "String Analyzer",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /strings",
            "GET /strings",
            "GET /strings/{value}",
            "DELETE /strings/{value}",
            "GET /health",
            "GET /ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

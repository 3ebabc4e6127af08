//! `/strings` endpoints: create, fetch, list with filters, delete.
//!
//! Lookups by path take the original string, not its hash: the segment is
//! percent-decoded by the router and hashed by [`string_analyzer::lookup`].

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use string_analyzer::{FilterApplied, StringFilters, StringRecord};

/// Validated body of `POST /strings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStringRequest {
    pub value: String,
}

impl TryFrom<Value> for CreateStringRequest {
    type Error = ServerError;

    /// `value` must be a JSON string (422 otherwise) that is not blank
    /// after trimming (400 otherwise).
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        match body.get("value") {
            Some(Value::String(value)) if string_analyzer::is_blank(value) => {
                Err(ServerError::EmptyValue)
            }
            Some(Value::String(value)) => Ok(Self {
                value: value.clone(),
            }),
            _ => Err(ServerError::InvalidValueType),
        }
    }
}

/// Response of `GET /strings`
#[derive(Debug, Serialize)]
pub struct StringListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filter_applied: FilterApplied,
}

/// Analyze and store a new string
pub async fn create_string(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(body) = body?;
    let request = CreateStringRequest::try_from(body)?;

    let record = state
        .with_repo(move |repo| string_analyzer::submit(repo, &request.value))
        .await?;

    tracing::info!(id = %record.id, length = record.properties.length, "stored string");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Fetch a stored string by its original value
pub async fn get_string(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let record = state
        .with_repo(move |repo| string_analyzer::lookup(repo, &value))
        .await?;
    Ok(Json(record))
}

/// List stored strings matching the query filters. Malformed filter values
/// narrow the result instead of failing the request.
pub async fn list_strings(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ServerResult<impl IntoResponse> {
    let Query(params) = query?;
    let filter_applied: FilterApplied = params.into_iter().collect();
    let filters = StringFilters::from_params(&filter_applied);

    let data = state.with_repo(move |repo| repo.query(&filters)).await?;

    Ok(Json(StringListResponse {
        count: data.len(),
        data,
        filter_applied,
    }))
}

/// Delete a stored string by its original value
pub async fn delete_string(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let removed = state
        .with_repo(move |repo| string_analyzer::remove(repo, &value))
        .await?;

    tracing::info!(id = %removed.id, "deleted string");
    Ok(StatusCode::NO_CONTENT)
}

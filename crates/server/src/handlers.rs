use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use stringstat_protocol::{parse_filters, AnalysisRecord, FilterCriteria};
use stringstat_query::{filter_records, translate};
use stringstat_store::StoreError;

#[derive(Serialize)]
pub(crate) struct ListResponse {
    data: Vec<AnalysisRecord>,
    count: usize,
    filters_applied: FilterCriteria,
}

#[derive(Serialize)]
pub(crate) struct NaturalLanguageResponse {
    data: Vec<AnalysisRecord>,
    count: usize,
    interpreted_query: InterpretedQuery,
}

#[derive(Serialize)]
pub(crate) struct InterpretedQuery {
    original: String,
    parsed_filters: FilterCriteria,
}

pub(crate) async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /strings` — analyze and persist a new value.
///
/// The body is taken as raw JSON so a present-but-non-string "value" can be
/// told apart (422) from a missing field or unreadable body (400).
pub(crate) async fn create_string(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<AnalysisRecord>), ApiError> {
    let Some(Json(body)) = body else {
        return Err(ApiError::InvalidBody("invalid JSON request body"));
    };
    let value = body
        .get("value")
        .ok_or(ApiError::InvalidBody("missing \"value\" field"))?;
    let value = value.as_str().ok_or(ApiError::TypeInvalid)?;
    if value.is_empty() {
        return Err(ApiError::InvalidBody("\"value\" must not be empty"));
    }

    // The write lock spans check-and-insert, so the duplicate check is atomic.
    let record = state.store.write().await.create(value)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /strings/:value` — fetch one record by its original value.
pub(crate) async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    state
        .store
        .read()
        .await
        .get_by_value(&value)
        .cloned()
        .map(Json)
        .ok_or(ApiError::Store(StoreError::NotFound))
}

/// `GET /strings` — list records, optionally narrowed by structured filters.
pub(crate) async fn list_strings(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse>, ApiError> {
    let criteria = parse_filters(&params)?;

    let store = state.store.read().await;
    let data: Vec<AnalysisRecord> = filter_records(&criteria, store.all())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ListResponse {
        count: data.len(),
        data,
        filters_applied: criteria,
    }))
}

/// `GET /strings/filter-by-natural-language?query=...` — translate free text
/// into filters, then evaluate them like a structured query.
pub(crate) async fn filter_by_natural_language(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let text = params
        .get("query")
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)?;
    let translation = translate(text)?;

    let store = state.store.read().await;
    let data: Vec<AnalysisRecord> = filter_records(&translation.criteria, store.all())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: translation.original,
            parsed_filters: translation.criteria,
        },
    }))
}

/// `DELETE /strings/:value` — remove one record by its original value.
pub(crate) async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.write().await.remove_by_value(&value)?;
    Ok(StatusCode::NO_CONTENT)
}

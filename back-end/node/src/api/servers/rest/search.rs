//! Request search handlers.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::Json;

use crate::api::dto::{ApiError, HeightResponse};
use crate::api::servers::app_state::AppState;
use crate::modules::search::{RequestRecord, ResultEnvelope, SearchSpec};

type Params = HashMap<String, String>;

fn required<'a>(params: &'a Params, key: &str) -> Result<&'a str, ApiError> {
    params
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ApiError::validation(format!("{} is required", key)))
}

fn spec_from_params(params: &Params) -> Result<SearchSpec, ApiError> {
    Ok(SearchSpec::new(
        required(params, "oid")?,
        required(params, "calldata")?,
        required(params, "ask_count")?,
        required(params, "min_count")?,
    ))
}

/// Latest request matching a specification.
pub async fn request_search(
    State(app_state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<HeightResponse<ResultEnvelope<RequestRecord>>>, ApiError> {
    let spec = spec_from_params(&params)?;

    let envelope = app_state.search.search_one(&spec).await?;

    Ok(Json(HeightResponse {
        height: envelope.height,
        result: envelope,
    }))
}

/// Latest `limit` resolved requests matching a specification.
pub async fn multi_request_search(
    State(app_state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<HeightResponse<ResultEnvelope<Vec<RequestRecord>>>>, ApiError> {
    let spec = spec_from_params(&params)?;
    let limit = required(&params, "limit")?
        .parse::<u32>()
        .map_err(|e| ApiError::validation(format!("invalid limit: {}", e)))?;

    let envelope = app_state.search.search_many(&spec, limit).await?;

    Ok(Json(HeightResponse {
        height: envelope.height,
        result: envelope,
    }))
}

//! Helpers for driving the REST router in-process.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use request_search::api::servers::app_state::AppState;
use request_search::api::servers::rest::build_router;
use request_search::modules::search::{SearchConfig, SearchRouter};
use serde_json::Value;
use tower::ServiceExt;

use crate::util::InMemoryChain;

/// Build a REST router backed by `chain`.
pub fn test_router(chain: InMemoryChain) -> Router {
    let search = SearchRouter::new(chain.into_client(), SearchConfig::new().with_max_limit(10));
    build_router(AppState::new(Arc::new(search)))
}

/// Issue a GET request and decode the JSON body.
pub async fn get_request(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

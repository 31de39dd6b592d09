//! Query transport seam.
//!
//! A [`QueryClient`] issues a read-only query against the chain's state and
//! returns the raw payload together with the height it was served at. How
//! the query travels (RPC, light client, in-process) is up to the
//! implementation.

use async_trait::async_trait;

use super::error::SearchResult;
use super::types::{RequestId, SearchSpec};

/// Raw answer to a state query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQueryResponse {
    /// Serialized payload.
    pub value: Vec<u8>,
    /// Height of the state the query was served from.
    pub height: i64,
}

impl RawQueryResponse {
    /// Create a new raw response.
    pub fn new(value: impl Into<Vec<u8>>, height: i64) -> Self {
        Self {
            value: value.into(),
            height,
        }
    }
}

/// Client able to run read-only state queries.
///
/// Implementations must be safe to call concurrently; the aggregator issues
/// one query per request id at the same time.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Run a query at `path`.
    ///
    /// Any failure to reach the chain must be reported as
    /// [`RequestSearchError::Transport`](super::error::RequestSearchError::Transport).
    async fn query(&self, path: &str) -> SearchResult<RawQueryResponse>;
}

/// Path of the latest-request index query.
pub fn latest_request_path(spec: &SearchSpec, limit: u32) -> String {
    format!(
        "band/latest_request/{}/{}/{}/{}/{}",
        spec.oracle_script_id, spec.calldata, spec.ask_count, spec.min_count, limit
    )
}

/// Path of the single request query.
pub fn request_path(route: &str, id: RequestId) -> String {
    format!("custom/{}/request/{}", route, id)
}

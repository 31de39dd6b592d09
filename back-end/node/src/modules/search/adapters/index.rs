//! Index resolver backed by the chain's latest-request index.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::IndexResolver;
use crate::modules::search::error::{RequestSearchError, SearchResult};
use crate::modules::search::transport::{latest_request_path, QueryClient};
use crate::modules::search::types::{Candidates, RequestId, SearchSpec};

/// Resolves specifications through the `band/latest_request` query.
///
/// The index answers with a JSON array of request ids ordered most recent
/// first.
pub struct ChainIndexResolver {
    client: Arc<dyn QueryClient>,
}

impl ChainIndexResolver {
    /// Create a new index resolver.
    pub fn new(client: Arc<dyn QueryClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IndexResolver for ChainIndexResolver {
    async fn resolve_latest(&self, spec: &SearchSpec, limit: u32) -> SearchResult<Candidates> {
        let path = latest_request_path(spec, limit);
        let response = self.client.query(&path).await?;

        let ids: Vec<RequestId> = serde_json::from_slice(&response.value).map_err(|e| {
            RequestSearchError::decode(format!("latest request ids at {}: {}", path, e))
        })?;

        debug!(path = %path, count = ids.len(), "Resolved latest request ids");

        Ok(Candidates::from(ids))
    }
}

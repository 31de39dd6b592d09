//! Main SearchRouter entry point.
//!
//! The SearchRouter is the public API for request search, handling
//! request validation, logging, and delegation to the orchestrator.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use super::adapters::{ChainIndexResolver, ChainRecordFetcher};
use super::config::SearchConfig;
use super::error::{RequestValidator, SearchResult};
use super::orchestrator::SearchOrchestrator;
use super::transport::QueryClient;
use super::types::{RequestRecord, ResultEnvelope, SearchSpec};

/// Main entry point for request search operations.
///
/// # Example
///
/// ```ignore
/// let router = SearchRouter::new(client, SearchConfig::from_env());
/// let spec = SearchSpec::new("8", "0000000342544300000000000000", "4", "3");
///
/// let latest = router.search_one(&spec).await?;
/// let recent = router.search_many(&spec, 10).await?;
/// ```
pub struct SearchRouter {
    /// Search orchestrator.
    orchestrator: SearchOrchestrator,

    /// Configuration.
    config: SearchConfig,
}

impl SearchRouter {
    /// Create a new SearchRouter querying the chain through `client`.
    pub fn new(client: Arc<dyn QueryClient>, config: SearchConfig) -> Self {
        let index = Arc::new(ChainIndexResolver::new(client.clone()));
        let fetcher = Arc::new(ChainRecordFetcher::new(client, config.route.clone()));

        Self {
            orchestrator: SearchOrchestrator::new(index, fetcher),
            config,
        }
    }

    /// Create a SearchRouter with a custom orchestrator.
    ///
    /// This is useful for testing or advanced configurations.
    pub fn with_orchestrator(orchestrator: SearchOrchestrator, config: SearchConfig) -> Self {
        Self {
            orchestrator,
            config,
        }
    }

    /// Find the latest request matching `spec`.
    pub async fn search_one(
        &self,
        spec: &SearchSpec,
    ) -> SearchResult<ResultEnvelope<RequestRecord>> {
        let start = Instant::now();
        RequestValidator::validate_spec(spec)?;

        info!(
            oracle_script_id = %spec.oracle_script_id,
            ask_count = %spec.ask_count,
            min_count = %spec.min_count,
            "SearchRouter processing latest request search"
        );

        let envelope = self.orchestrator.find_latest_one(spec).await?;

        info!(
            status = ?envelope.status,
            height = envelope.height,
            elapsed_ms = start.elapsed().as_millis(),
            "Latest request search complete"
        );

        Ok(envelope)
    }

    /// Find up to `limit` latest resolved requests matching `spec`.
    pub async fn search_many(
        &self,
        spec: &SearchSpec,
        limit: u32,
    ) -> SearchResult<ResultEnvelope<Vec<RequestRecord>>> {
        let start = Instant::now();
        RequestValidator::validate_spec(spec)?;
        RequestValidator::validate_limit(limit, self.config.max_limit)?;

        info!(
            oracle_script_id = %spec.oracle_script_id,
            ask_count = %spec.ask_count,
            min_count = %spec.min_count,
            limit = limit,
            "SearchRouter processing multi request search"
        );

        let envelope = self.orchestrator.find_latest_many(spec, limit).await?;

        info!(
            status = ?envelope.status,
            results = envelope.result.as_ref().map_or(0, Vec::len),
            height = envelope.height,
            elapsed_ms = start.elapsed().as_millis(),
            "Multi request search complete"
        );

        Ok(envelope)
    }

    /// Like [`search_one`](Self::search_one), returning the encoded envelope and height.
    pub async fn search_one_json(&self, spec: &SearchSpec) -> SearchResult<(Vec<u8>, i64)> {
        let envelope = self.search_one(spec).await?;
        let height = envelope.height;
        Ok((serde_json::to_vec(&envelope)?, height))
    }

    /// Like [`search_many`](Self::search_many), returning the encoded envelope and height.
    pub async fn search_many_json(
        &self,
        spec: &SearchSpec,
        limit: u32,
    ) -> SearchResult<(Vec<u8>, i64)> {
        let envelope = self.search_many(spec, limit).await?;
        let height = envelope.height;
        Ok((serde_json::to_vec(&envelope)?, height))
    }
}

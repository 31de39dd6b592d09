//! Search orchestrator.
//!
//! Composes the index lookup with record fetching for the two search
//! operations and maps outcomes onto [`ResultEnvelope`]s.

use std::sync::Arc;

use tracing::{debug, error};

use super::adapters::{IndexResolver, RecordFetcher};
use super::aggregator::ConcurrentAggregator;
use super::error::{RequestSearchError, SearchResult};
use super::types::{Candidates, RequestRecord, ResultEnvelope, SearchSpec};

/// Orchestrates index resolution and record fetching.
pub struct SearchOrchestrator {
    /// Index resolver.
    index: Arc<dyn IndexResolver>,

    /// Record fetcher for the single-match path.
    fetcher: Arc<dyn RecordFetcher>,

    /// Concurrent aggregator for the multi-match path.
    aggregator: ConcurrentAggregator,
}

impl SearchOrchestrator {
    /// Create a new search orchestrator.
    pub fn new(index: Arc<dyn IndexResolver>, fetcher: Arc<dyn RecordFetcher>) -> Self {
        Self {
            index,
            aggregator: ConcurrentAggregator::new(fetcher.clone()),
            fetcher,
        }
    }

    /// Find the most recent request matching `spec`.
    ///
    /// The record is returned whether or not it has resolved yet.
    pub async fn find_latest_one(
        &self,
        spec: &SearchSpec,
    ) -> SearchResult<ResultEnvelope<RequestRecord>> {
        let ids = match self.index.resolve_latest(spec, 1).await? {
            Candidates::NoMatch => {
                debug!(spec = ?spec, "No request matches specification");
                return Ok(ResultEnvelope::not_found());
            }
            Candidates::Found(ids) => ids,
        };

        let id = match ids.as_slice() {
            [id] => *id,
            [] => {
                debug!(spec = ?spec, "Index returned an empty id list");
                return Ok(ResultEnvelope::not_found());
            }
            _ => {
                error!(
                    spec = ?spec,
                    count = ids.len(),
                    "Index returned more than one id for limit 1"
                );
                return Err(RequestSearchError::InvariantViolation(format!(
                    "index returned {} ids for limit 1",
                    ids.len()
                )));
            }
        };

        let fetched = self.fetcher.fetch(id).await?;

        Ok(ResultEnvelope::ok(fetched.record, fetched.height))
    }

    /// Find up to `limit` most recently resolved requests matching `spec`.
    pub async fn find_latest_many(
        &self,
        spec: &SearchSpec,
        limit: u32,
    ) -> SearchResult<ResultEnvelope<Vec<RequestRecord>>> {
        let ids = match self.index.resolve_latest(spec, limit).await? {
            Candidates::NoMatch => {
                debug!(spec = ?spec, "No request matches specification");
                return Ok(ResultEnvelope::not_found());
            }
            Candidates::Found(ids) => ids,
        };

        let aggregated = self.aggregator.aggregate(&ids, limit).await?;

        if aggregated.records.is_empty() {
            debug!(
                candidates = ids.len(),
                pending = aggregated.pending_count,
                "All matching requests are still pending"
            );
            return Ok(ResultEnvelope::not_found());
        }

        let records = aggregated
            .records
            .into_iter()
            .map(|fetched| fetched.record)
            .collect();

        Ok(ResultEnvelope::ok(records, aggregated.height))
    }
}

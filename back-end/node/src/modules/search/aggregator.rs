//! Concurrent record aggregation.
//!
//! The [`ConcurrentAggregator`] handles:
//! 1. Fan-out: one fetch task per distinct request id, all spawned at once
//! 2. Fan-in: drain exactly one completion per task from a done-queue
//! 3. Fail-fast: the first failed fetch fails the whole batch
//! 4. Filtering of still-pending records
//! 5. Sorting by resolve time, newest first
//! 6. Truncation to the caller's limit

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::adapters::RecordFetcher;
use super::error::{RequestSearchError, SearchResult};
use super::types::{FetchedRecord, RequestId};

/// Result of aggregating one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRecords {
    /// Resolved records, newest first, at most `limit` long.
    pub records: Vec<FetchedRecord>,
    /// Highest read height among retained records, 0 if none were retained.
    pub height: i64,
    /// Number of fetched records dropped because they were still pending.
    pub pending_count: u32,
}

impl AggregatedRecords {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            height: 0,
            pending_count: 0,
        }
    }
}

/// Fetches a batch of records concurrently and orders the resolved ones.
///
/// # Execution Model
///
/// Every distinct id gets its own tokio task; repeats after the first
/// occurrence are skipped. Tasks report into an mpsc channel
/// sized to the batch, so no send ever waits. The aggregator drains one
/// message per dispatched task; the first error ends the drain and is
/// returned as is. Tasks still running at that point finish on their own
/// and their sends are dropped with the receiver.
#[derive(Clone)]
pub struct ConcurrentAggregator {
    fetcher: Arc<dyn RecordFetcher>,
}

impl ConcurrentAggregator {
    /// Create a new aggregator over the given fetcher.
    pub fn new(fetcher: Arc<dyn RecordFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch every id in `ids` and return the `limit` most recently resolved records.
    ///
    /// Pending records are dropped silently. Any fetch failure fails the
    /// whole call; no partial list is ever returned.
    pub async fn aggregate(&self, ids: &[RequestId], limit: u32) -> SearchResult<AggregatedRecords> {
        if ids.is_empty() {
            return Ok(AggregatedRecords::empty());
        }

        let mut seen = HashSet::with_capacity(ids.len());
        let distinct: Vec<RequestId> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();

        debug!(
            dispatched = distinct.len(),
            duplicates = ids.len() - distinct.len(),
            limit = limit,
            "Dispatching record fetches"
        );

        let (tx, mut rx) = mpsc::channel(distinct.len());

        for &id in &distinct {
            let fetcher = self.fetcher.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = fetcher.fetch(id).await;
                // The receiver is gone once the batch has already failed.
                let _ = tx.send((id, outcome)).await;
            });
        }
        drop(tx);

        let mut retained = Vec::with_capacity(distinct.len());
        let mut pending_count = 0u32;
        let mut height = 0i64;

        for _ in 0..distinct.len() {
            let (id, outcome) = rx.recv().await.ok_or_else(|| {
                RequestSearchError::internal("record fetch task ended without reporting")
            })?;

            let fetched = match outcome {
                Ok(fetched) => fetched,
                Err(e) => {
                    warn!(id = %id, error = %e, "Record fetch failed, aborting batch");
                    return Err(e);
                }
            };

            if !fetched.record.is_resolved() {
                pending_count += 1;
                continue;
            }

            height = height.max(fetched.height);
            retained.push(fetched);
        }

        retained.sort_by(newest_first);
        retained.truncate(limit as usize);

        debug!(
            retained = retained.len(),
            pending = pending_count,
            height = height,
            "Aggregation complete"
        );

        Ok(AggregatedRecords {
            records: retained,
            height,
            pending_count,
        })
    }
}

/// Order by resolve time descending; equal times put the higher id first.
fn newest_first(a: &FetchedRecord, b: &FetchedRecord) -> Ordering {
    b.record
        .resolve_time()
        .cmp(&a.record.resolve_time())
        .then_with(|| b.id.cmp(&a.id))
}

//! In-memory chain fixtures for search tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use request_search::modules::search::transport::latest_request_path;
use request_search::modules::search::{
    QueryClient, RawQueryResponse, RequestId, RequestRecord, RequestSearchError, SearchResult,
    SearchSpec,
};
use serde_json::json;

/// A stored request: `resolve_time` is `None` while pending.
#[derive(Debug, Clone, Copy)]
pub struct StoredRequest {
    pub resolve_time: Option<i64>,
    pub height: i64,
}

/// Chain state answering index and record queries from memory.
#[derive(Default)]
pub struct InMemoryChain {
    /// Index entries keyed by the spec part of the query path, most recent first.
    index: HashMap<String, Vec<u64>>,
    records: HashMap<u64, StoredRequest>,
    failing: HashSet<u64>,
    malformed: HashSet<u64>,
    index_down: bool,
    ignore_limit: bool,
    record_queries: AtomicUsize,
}

impl InMemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ids` (most recent first) as the index answer for `spec`.
    pub fn with_index(mut self, spec: &SearchSpec, ids: &[u64]) -> Self {
        self.index.insert(index_key(spec), ids.to_vec());
        self
    }

    pub fn with_resolved(mut self, id: u64, resolve_time: i64, height: i64) -> Self {
        self.records.insert(
            id,
            StoredRequest {
                resolve_time: Some(resolve_time),
                height,
            },
        );
        self
    }

    pub fn with_pending(mut self, id: u64, height: i64) -> Self {
        self.records.insert(
            id,
            StoredRequest {
                resolve_time: None,
                height,
            },
        );
        self
    }

    /// Record queries for `id` fail with a transport error.
    pub fn with_failing(mut self, id: u64) -> Self {
        self.failing.insert(id);
        self
    }

    /// Record queries for `id` return a payload that is not a record.
    pub fn with_malformed(mut self, id: u64) -> Self {
        self.malformed.insert(id);
        self
    }

    /// Index queries fail with a transport error.
    pub fn with_index_down(mut self) -> Self {
        self.index_down = true;
        self
    }

    /// Index returns every matching id regardless of the requested limit.
    pub fn ignoring_limit(mut self) -> Self {
        self.ignore_limit = true;
        self
    }

    pub fn record_queries(&self) -> usize {
        self.record_queries.load(Ordering::SeqCst)
    }

    pub fn into_client(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn answer_index(&self, path: &str) -> SearchResult<RawQueryResponse> {
        if self.index_down {
            return Err(RequestSearchError::transport("index service unavailable"));
        }
        let (key, limit) = path
            .rsplit_once('/')
            .ok_or_else(|| RequestSearchError::transport("bad index path"))?;
        let limit: usize = limit
            .parse()
            .map_err(|_| RequestSearchError::transport("bad limit"))?;

        let mut ids = self.index.get(key).cloned().unwrap_or_default();
        if !self.ignore_limit {
            ids.truncate(limit);
        }
        Ok(RawQueryResponse::new(serde_json::to_vec(&ids).unwrap(), 100))
    }

    fn answer_record(&self, id: u64) -> SearchResult<RawQueryResponse> {
        self.record_queries.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(&id) {
            return Err(RequestSearchError::transport(format!(
                "connection reset fetching {}",
                id
            )));
        }
        if self.malformed.contains(&id) {
            return Ok(RawQueryResponse::new("<html>bad gateway</html>", 0));
        }

        let Some(stored) = self.records.get(&id) else {
            let body = json!({"status": "NOT_FOUND", "result": null});
            return Ok(RawQueryResponse::new(serde_json::to_vec(&body).unwrap(), 0));
        };

        let record = match stored.resolve_time {
            Some(t) => RequestRecord::resolved(RequestId(id), t),
            None => RequestRecord::pending(),
        };
        let body = json!({"status": "OK", "result": record});
        Ok(RawQueryResponse::new(
            serde_json::to_vec(&body).unwrap(),
            stored.height,
        ))
    }
}

#[async_trait]
impl QueryClient for InMemoryChain {
    async fn query(&self, path: &str) -> SearchResult<RawQueryResponse> {
        if path.starts_with("band/latest_request/") {
            return self.answer_index(path);
        }
        if let Some(id) = path.strip_prefix("custom/oracle/request/") {
            let id = id
                .parse()
                .map_err(|_| RequestSearchError::transport("bad request id"))?;
            return self.answer_record(id);
        }
        Err(RequestSearchError::transport(format!("unknown path {}", path)))
    }
}

fn index_key(spec: &SearchSpec) -> String {
    let path = latest_request_path(spec, 1);
    path.rsplit_once('/').map(|(key, _)| key.to_string()).unwrap_or(path)
}

/// The specification most tests search for.
pub fn price_spec() -> SearchSpec {
    SearchSpec::new("8", "0000000342544300000000000000000a", "4", "3")
}

/// Resolve ids of a records envelope payload, in order.
pub fn resolved_ids(records: &[RequestRecord]) -> Vec<u64> {
    records
        .iter()
        .filter_map(|r| r.result.as_ref())
        .map(|r| r.response_packet_data.request_id.get())
        .collect()
}

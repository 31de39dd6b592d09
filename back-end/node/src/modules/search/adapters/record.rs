//! Record fetcher backed by the chain's request query.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::trace;

use super::RecordFetcher;
use crate::modules::search::error::{RequestSearchError, SearchResult};
use crate::modules::search::transport::{request_path, QueryClient};
use crate::modules::search::types::{FetchedRecord, QueryStatus, RequestId, RequestRecord};

/// Query envelope wrapping a record payload.
#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    status: QueryStatus,
    #[serde(default)]
    result: serde_json::Value,
}

/// Fetches records through `custom/{route}/request/{id}`.
pub struct ChainRecordFetcher {
    client: Arc<dyn QueryClient>,
    route: String,
}

impl ChainRecordFetcher {
    /// Create a new record fetcher for the given module route.
    pub fn new(client: Arc<dyn QueryClient>, route: impl Into<String>) -> Self {
        Self {
            client,
            route: route.into(),
        }
    }
}

#[async_trait]
impl RecordFetcher for ChainRecordFetcher {
    async fn fetch(&self, id: RequestId) -> SearchResult<FetchedRecord> {
        let path = request_path(&self.route, id);
        let response = self.client.query(&path).await?;

        let envelope: QueryEnvelope = serde_json::from_slice(&response.value)
            .map_err(|e| RequestSearchError::decode(format!("request {}: {}", id, e)))?;

        if envelope.status != QueryStatus::Ok {
            return Err(RequestSearchError::RecordUnavailable {
                id,
                status: format!("{:?}", envelope.status),
            });
        }

        let record: RequestRecord = serde_json::from_value(envelope.result)
            .map_err(|e| RequestSearchError::decode(format!("request {}: {}", id, e)))?;

        trace!(
            id = %id,
            height = response.height,
            resolved = record.is_resolved(),
            "Fetched request record"
        );

        Ok(FetchedRecord {
            id,
            record,
            height: response.height,
        })
    }
}

//! Chain adapters for request search.
//!
//! Adapters wrap a [`QueryClient`](super::transport::QueryClient) to provide
//! the two lookups the search needs: resolving a specification to request
//! ids, and fetching a single request record.

pub mod index;
pub mod record;

use async_trait::async_trait;

use super::error::SearchResult;
use super::types::{Candidates, FetchedRecord, RequestId, SearchSpec};

/// Resolves a search specification to matching request ids.
#[async_trait]
pub trait IndexResolver: Send + Sync {
    /// Look up at most `limit` ids matching `spec`, most recent first.
    ///
    /// An empty match is [`Candidates::NoMatch`], never an error.
    async fn resolve_latest(&self, spec: &SearchSpec, limit: u32) -> SearchResult<Candidates>;
}

/// Fetches a single request record.
///
/// Pure read; safe to call concurrently and repeatedly.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    /// Fetch the record for `id` with the height it was read at.
    async fn fetch(&self, id: RequestId) -> SearchResult<FetchedRecord>;
}

pub use index::ChainIndexResolver;
pub use record::ChainRecordFetcher;

//! Request Search Module
//!
//! Finds the most recent oracle data requests matching a specification
//! (oracle script, calldata, ask count, min count) without knowing their
//! ids up front.
//!
//! # Architecture
//!
//! ```text
//! SearchRouter (validation, logging)
//!     ↓
//! SearchOrchestrator
//! ├── IndexResolver (band/latest_request)
//! └── ConcurrentAggregator
//!         ↓ one task per id
//!     RecordFetcher (custom/{route}/request/{id})
//!         ↓
//!     ResultEnvelope (OK | NOT_FOUND, height)
//! ```

pub mod adapters;
pub mod aggregator;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod router;
pub mod transport;
pub mod types;

// Re-exports for convenient access
pub use adapters::{ChainIndexResolver, ChainRecordFetcher, IndexResolver, RecordFetcher};
pub use aggregator::{AggregatedRecords, ConcurrentAggregator};
pub use config::SearchConfig;
pub use error::{RequestSearchError, SearchResult};
pub use orchestrator::SearchOrchestrator;
pub use router::SearchRouter;
pub use transport::{QueryClient, RawQueryResponse};
pub use types::{
    Candidates, FetchedRecord, QueryStatus, RequestId, RequestRecord, ResultEnvelope, SearchSpec,
};

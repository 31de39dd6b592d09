//! Aggregator tests against the chain record fetcher.

use std::sync::Arc;

use request_search::modules::search::{
    ChainRecordFetcher, ConcurrentAggregator, RequestId, RequestSearchError,
};

use crate::util::InMemoryChain;

fn aggregator_for(chain: Arc<InMemoryChain>) -> ConcurrentAggregator {
    ConcurrentAggregator::new(Arc::new(ChainRecordFetcher::new(chain, "oracle")))
}

fn ids(raw: &[u64]) -> Vec<RequestId> {
    raw.iter().copied().map(RequestId).collect()
}

#[tokio::test]
async fn test_mixed_batch_orders_resolved_records() {
    let chain = InMemoryChain::new()
        .with_resolved(7, 100, 50)
        .with_pending(3, 51)
        .with_resolved(9, 150, 52)
        .into_client();
    let aggregator = aggregator_for(chain.clone());

    let result = aggregator.aggregate(&ids(&[7, 3, 9]), 3).await.unwrap();

    let got: Vec<u64> = result.records.iter().map(|r| r.id.get()).collect();
    assert_eq!(got, vec![9, 7]);
    assert_eq!(result.height, 52);
    assert_eq!(chain.record_queries(), 3);
}

#[tokio::test]
async fn test_transport_failure_discards_successful_fetches() {
    let chain = InMemoryChain::new()
        .with_resolved(1, 10, 5)
        .with_failing(2)
        .into_client();
    let aggregator = aggregator_for(chain);

    let err = aggregator.aggregate(&ids(&[1, 2]), 5).await.unwrap_err();

    assert!(matches!(err, RequestSearchError::Transport(_)));
}

#[tokio::test]
async fn test_malformed_record_fails_batch() {
    let chain = InMemoryChain::new()
        .with_resolved(1, 10, 5)
        .with_malformed(2)
        .into_client();
    let aggregator = aggregator_for(chain);

    let err = aggregator.aggregate(&ids(&[1, 2]), 5).await.unwrap_err();

    assert!(matches!(err, RequestSearchError::Decode(_)));
}

#[tokio::test]
async fn test_unknown_request_fails_batch() {
    let chain = InMemoryChain::new().with_resolved(1, 10, 5).into_client();
    let aggregator = aggregator_for(chain);

    let err = aggregator.aggregate(&ids(&[1, 404]), 5).await.unwrap_err();

    assert!(matches!(
        err,
        RequestSearchError::RecordUnavailable {
            id: RequestId(404),
            ..
        }
    ));
}

#[tokio::test]
async fn test_large_batch_fetches_every_id_once() {
    let mut chain = InMemoryChain::new();
    for id in 1..=64u64 {
        chain = chain.with_resolved(id, id as i64, id as i64);
    }
    let chain = chain.into_client();
    let aggregator = aggregator_for(chain.clone());
    let all: Vec<u64> = (1..=64).rev().collect();

    let result = aggregator.aggregate(&ids(&all), 10).await.unwrap();

    assert_eq!(chain.record_queries(), 64);
    let got: Vec<u64> = result.records.iter().map(|r| r.id.get()).collect();
    assert_eq!(got, (55..=64).rev().collect::<Vec<u64>>());
    assert_eq!(result.height, 64);
}

#[tokio::test]
async fn test_duplicate_ids_queried_once() {
    let chain = InMemoryChain::new().with_resolved(5, 10, 5).into_client();
    let aggregator = aggregator_for(chain.clone());

    let result = aggregator.aggregate(&ids(&[5, 5]), 5).await.unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, RequestId(5));
    assert_eq!(chain.record_queries(), 1);
}

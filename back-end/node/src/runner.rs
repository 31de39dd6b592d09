use std::sync::Arc;

use tracing::info;

use crate::api::servers::{app_state::AppState, rest};
use crate::modules::search::{QueryClient, RequestSearchError, SearchConfig, SearchRouter};

/// Start the request search REST server on top of `client`.
///
/// Installs the tracing subscriber, builds the search router from `config`
/// and serves until the listener stops.
pub async fn serve(
    client: Arc<dyn QueryClient>,
    config: SearchConfig,
) -> Result<(), RequestSearchError> {
    init_tracing();

    info!(
        route = %config.route,
        max_limit = config.max_limit,
        "Configuration loaded. Starting request search..."
    );

    let bind_addr = config.rest_bind_addr.clone();
    let search = Arc::new(SearchRouter::new(client, config));

    rest::serve(AppState::new(search), &bind_addr).await
}

/// Install the global `fmt` subscriber. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

use std::sync::Arc;

use crate::modules::search::SearchRouter;

/// Shared state handed to every REST handler.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchRouter>,
}

impl AppState {
    pub fn new(search: Arc<SearchRouter>) -> Self {
        Self { search }
    }
}

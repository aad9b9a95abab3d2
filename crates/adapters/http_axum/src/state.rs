//! Shared application state for axum handlers.

use std::sync::Arc;

use blinkhub_app::services::dispatcher::RouteDispatcher;

/// Application state shared across all axum handlers.
///
/// The dispatcher is fully registered before it is wrapped here, so request
/// handling only ever reads the route table.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<RouteDispatcher>,
}

impl AppState {
    /// Create a new application state from a registered dispatcher.
    #[must_use]
    pub fn new(dispatcher: RouteDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}

//! Shared application state for Axum routers.

use eventra_llm::GenerationCoordinator;
use std::sync::Arc;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// The provider fallback chain. Stateless per invocation; shared so
    /// every request uses the same configured provider slots.
    pub coordinator: Arc<GenerationCoordinator>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(coordinator: GenerationCoordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
            start_time: std::time::Instant::now(),
        }
    }
}

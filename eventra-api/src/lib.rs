//! EVENTRA API - HTTP Boundary
//!
//! Axum HTTP layer for the Eventra generation service. Exposes the
//! draft-generation endpoint consumed by the event-creation wizard,
//! plus health checks. CORS is permissive by default since the hosting
//! platform fronts this service.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::create_api_router;
pub use state::AppState;

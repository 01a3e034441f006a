//! Router assembly for the Eventra API.

use crate::config::ApiConfig;
use crate::state::AppState;
use axum::http::{header, HeaderValue, Method};
use axum::routing::post;
use axum::Router;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

pub mod generate;
pub mod health;

/// Create the API router with CORS applied.
pub fn create_api_router(state: AppState, config: &ApiConfig) -> Router {
    let cors = build_cors_layer(config);

    Router::new()
        .route("/v1/generate", post(generate::generate_event))
        .with_state(state)
        .nest("/health", health::create_router())
        .layer(cors)
}

/// Build the CORS layer from ApiConfig.
///
/// With no pinned origins (the default), all origins are allowed and
/// OPTIONS preflight requests are answered by the layer itself.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.allows_any_origin() {
        tracing::info!("CORS: allowing all origins");
        cors.allow_origin(Any).allow_headers(Any)
    } else {
        tracing::info!("CORS: allowing origins: {:?}", config.cors_origins);
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    }
}

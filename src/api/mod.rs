// file: src/api/mod.rs
// description: http request boundary module exports
// reference: internal module structure

pub mod handlers;

pub use handlers::{AppState, CheckRequest, CheckResponse, ErrorBody};

use crate::browser::TableSource;
use crate::fetcher::CertificateSource;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

pub fn router<S, T>(state: AppState<S, T>) -> Router
where
    S: CertificateSource + Send + Sync + 'static,
    T: TableSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/check", post(handlers::check::<S, T>))
        .route("/cerberus", get(handlers::cerberus::<S, T>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

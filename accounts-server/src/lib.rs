//! An account signup and login server.

/// Accounts and their storage.
pub mod accounts;

/// Command-line and environment configuration.
pub mod config;

/// Errors returned to clients.
pub mod error;

mod handlers;

mod payload;

/// Shared request state.
pub mod state;

use accounts_core::api::{login, signup};
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use config::HttpConfig;
use state::State;
use tower_http::{compression, cors, decompression, limit, services::ServeDir, timeout, trace};

/// Build the app: API routes, static assets for everything else, and the
/// middleware shared by both.
pub fn app(state: State, http: &HttpConfig) -> Router {
    Router::new()
        // ROUTES
        .route(signup::PATH, post(handlers::signup::handler))
        .route(login::PATH, post(handlers::login::handler))
        .route("/health", get(handlers::health::handler))
        .fallback_service(ServeDir::new(&http.static_dir))
        // STATE
        .with_state(state)
        // LAYERS
        .layer(cors::CorsLayer::permissive())
        .layer(timeout::TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http.request_timeout,
        ))
        // the configured limit replaces axum's built-in one
        .layer(DefaultBodyLimit::disable())
        .layer(limit::RequestBodyLimitLayer::new(http.body_limit))
        .layer(decompression::RequestDecompressionLayer::new())
        .layer(compression::CompressionLayer::new())
        .layer(trace::TraceLayer::new_for_http())
}

//! Server error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::provider::ProviderError;

/// Errors that stop the server from starting or a page from rendering.
/// Provider failures during a request are not here: they render as page messages.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to prepare static directory {path}: {source}")]
    StaticDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    #[error("provider client: {0}")]
    Provider(#[from] ProviderError),
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        log::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

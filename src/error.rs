//! Top-level error type for rendering, mounting and serving the site.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::app::MountError;
use crate::catalog::StoreError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("catalog error: {0}")]
    Store(#[from] StoreError),

    #[error("mount error: {0}")]
    Mount(#[from] MountError),

    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal Server Error</h1>"),
        )
            .into_response()
    }
}

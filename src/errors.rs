use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures while loading the repository data file. Both are fatal at startup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read data file {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse data file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// An embedded template failed to parse.
#[derive(Debug, Error)]
#[error("parse template {name}: {source}")]
pub struct TemplateError {
    pub name: &'static str,
    #[source]
    pub source: minijinja::Error,
}

/// Errors raised while handling a single request.
///
/// These only ever affect the response they belong to.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("render {template}: {source}")]
    Render {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {self}");
        let message = match &self {
            AppError::Render { template, .. } => format!("failed to render {template}"),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

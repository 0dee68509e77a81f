//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` to automatically convert errors to appropriate HTTP responses
//! with JSON error bodies.
//!
//! Error mappings:
//! - `RepoNotFound`, `RefNotFound`, `PathNotFound` → 404
//! - `InvalidRequest` → 400
//! - `Unavailable` → 503
//! - `Git`, `Internal` → 500

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use git2::ErrorCode;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[source] git2::Error),

    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Branch not found: {0}")]
    RefNotFound(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The location did not resolve to a history stream.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::RepoNotFound(_) | AppError::RefNotFound(_) | AppError::PathNotFound(_)
        )
    }

    /// The backend may succeed if the caller retries later.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Unavailable(_))
    }

    pub fn lock_poisoned() -> Self {
        AppError::Unavailable("Lock poisoned".to_string())
    }
}

impl From<git2::Error> for AppError {
    fn from(e: git2::Error) -> Self {
        match e.code() {
            ErrorCode::Locked => AppError::Unavailable(e.message().to_string()),
            _ => AppError::Git(e),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::RepoNotFound(_) | AppError::RefNotFound(_) | AppError::PathNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Git(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

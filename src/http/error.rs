//! Application error type mapping to HTTP status codes and the failure envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::DashboardError;
use crate::http::response::{ErrorResponse, PrettyJson};

/// Message reported when the projects root is missing.
pub const DIRECTORY_NOT_FOUND: &str = "Projects directory not found";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Library errors.
    Dashboard(DashboardError),
    /// Generic internal error.
    Internal(String),
}

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        AppError::Dashboard(e)
    }
}

impl AppError {
    /// Message shown to the dashboard.
    pub fn message(&self) -> String {
        match self {
            AppError::Dashboard(DashboardError::DirectoryNotFound(_)) => {
                DIRECTORY_NOT_FOUND.to_string()
            }
            AppError::Dashboard(e) => e.to_string(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = ?self, "Request failed");

        let mut response = PrettyJson(ErrorResponse::new(self.message())).into_response();
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
    }
}

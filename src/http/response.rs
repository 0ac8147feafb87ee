//! Pretty-printed JSON responses and the projects envelope.
//!
//! ```json
//! { "success": true, "count": 2, "projects": [ ... ] }
//! { "success": false, "error": "Projects directory not found" }
//! ```

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::detector::ProjectInfo;

/// JSON body rendered with indentation.
#[derive(Debug)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "application/json")],
                    r#"{"success":false,"error":"Failed to serialize response"}"#.to_string(),
                )
                    .into_response()
            }
        }
    }
}

/// Successful projects listing.
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub success: bool,
    pub count: usize,
    pub projects: Vec<ProjectInfo>,
}

impl ProjectsResponse {
    pub fn new(projects: Vec<ProjectInfo>) -> Self {
        Self {
            success: true,
            count: projects.len(),
            projects,
        }
    }
}

/// Failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_response_counts() {
        let response = ProjectsResponse::new(vec![]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 0);
        assert!(value["projects"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(value, serde_json::json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn test_pretty_json_sets_content_type() {
        let response = PrettyJson(ErrorResponse::new("x")).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

//! Dashboard endpoints.
//!
//! GET /api/health-check - Companion service reachability.
//! GET /api/projects     - Project directories and their detected framework.

use axum::extract::State;

use crate::http::error::AppError;
use crate::http::response::{PrettyJson, ProjectsResponse};
use crate::prober::{health_report, HealthReport};
use crate::state::AppState;

/// GET /api/health-check
///
/// Always 200: unreachable services are reported as `down`.
pub async fn health_check(State(state): State<AppState>) -> PrettyJson<HealthReport> {
    PrettyJson(health_report(state.services(), state.probe_options()).await)
}

/// GET /api/projects
///
/// The scan touches the filesystem, so it runs on the blocking pool.
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<PrettyJson<ProjectsResponse>, AppError> {
    let scanner = state.scanner();
    let root = state.projects_root().to_path_buf();

    let projects = tokio::task::spawn_blocking(move || scanner.scan(&root))
        .await
        .map_err(|e| AppError::Internal(format!("Project scan task failed: {e}")))??;

    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(PrettyJson(ProjectsResponse::new(projects)))
}

//! Routes for the project collection.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, put},
};
use store::models::project::{CreateProject, Project};
use tracing::debug;

use crate::{AppState, error::ApiError};

/// GET /api/projects
/// Return the full collection in insertion order
pub async fn list_projects(State(state): State<AppState>) -> ResponseJson<Vec<Project>> {
    ResponseJson(state.store().list().await)
}

/// POST /api/projects
/// Create a project; the store assigns the id
pub async fn create_project(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateProject>,
) -> Result<ResponseJson<Project>, ApiError> {
    payload.validate()?;
    let created = state.store().create(payload).await;
    Ok(ResponseJson(created))
}

/// PUT /api/projects/{id}
/// Replace a project wholesale. The path id is authoritative; an id in the
/// body is ignored by the typed decode.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Json(payload): axum::Json<CreateProject>,
) -> Result<ResponseJson<Project>, ApiError> {
    payload.validate()?;
    let updated = state.store().update(payload.into_project(id)).await?;
    Ok(ResponseJson(updated))
}

/// DELETE /api/projects/{id}
/// Remove a project. Idempotent: deleting an absent id is still a 204.
pub async fn delete_project(State(state): State<AppState>, Path(id): Path<i64>) -> StatusCode {
    let removed = state.store().delete(id).await;
    debug!(id, removed, "handled delete request");
    StatusCode::NO_CONTENT
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/projects",
        Router::new()
            .route("/", get(list_projects).post(create_project))
            .route("/{id}", put(update_project).delete(delete_project)),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use store::models::project::Technologies;
    use store::{ProjectStore, StoreError};

    use super::*;

    fn state() -> AppState {
        AppState::new(Arc::new(ProjectStore::new()))
    }

    fn draft(summary: &str) -> CreateProject {
        CreateProject {
            summary: summary.to_string(),
            role: "Engineer".to_string(),
            team_size: 5,
            impact: "Shipped".to_string(),
            period: "2024".to_string(),
            details: "Details".to_string(),
            responsibilities: vec!["Build".to_string()],
            technologies: Technologies {
                languages: vec!["Rust".to_string()],
                frameworks: vec!["Axum".to_string()],
                tools: vec!["Docker".to_string()],
            },
            challenges: vec!["Scope".to_string()],
            achievements: vec!["Launch".to_string()],
            learnings: vec!["Plenty".to_string()],
        }
    }

    #[tokio::test]
    async fn post_assigns_an_id_and_keeps_submitted_fields() {
        let state = state();

        let created = create_project(State(state.clone()), axum::Json(draft("First")))
            .await
            .unwrap()
            .0;
        assert!(created.id >= 1);
        assert_eq!(created.summary, "First");
        assert_eq!(created.team_size, 5);
        assert_eq!(created.technologies.languages, vec!["Rust"]);

        let listed = list_projects(State(state)).await.0;
        assert!(listed.iter().any(|p| p.id == created.id));
    }

    #[tokio::test]
    async fn post_rejects_an_incomplete_draft() {
        let mut payload = draft("First");
        payload.achievements.clear();

        let err = create_project(State(state()), axum::Json(payload))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn put_replaces_under_the_path_id() {
        let state = state();
        let created = create_project(State(state.clone()), axum::Json(draft("First")))
            .await
            .unwrap()
            .0;

        let updated = update_project(
            State(state.clone()),
            Path(created.id),
            axum::Json(draft("First, revised")),
        )
        .await
        .unwrap()
        .0;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.summary, "First, revised");

        let listed = list_projects(State(state)).await.0;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].summary, "First, revised");
    }

    #[tokio::test]
    async fn put_of_an_unknown_id_is_not_found() {
        let err = update_project(State(state()), Path(99), axum::Json(draft("Ghost")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Store(StoreError::NotFound(99))));
    }

    #[tokio::test]
    async fn delete_empties_the_collection_and_stays_silent_on_repeat() {
        let state = state();
        let created = create_project(State(state.clone()), axum::Json(draft("First")))
            .await
            .unwrap()
            .0;

        let status = delete_project(State(state.clone()), Path(created.id)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(list_projects(State(state.clone())).await.0.is_empty());

        let status = delete_project(State(state), Path(created.id)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}

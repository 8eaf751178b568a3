use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::warn;

use playshelf_common::{ActivityDraft, ActivityPatch, PlayshelfError};

use crate::auth::AdminGate;
use crate::AppState;

fn not_found(id: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": format!("Activity not found: {id}")})),
    )
        .into_response()
}

pub async fn api_list_activities(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.load() {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to load activities");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn api_get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&id) {
        Ok(activity) => Json(activity).into_response(),
        Err(PlayshelfError::NotFound { .. }) => not_found(&id),
        Err(e) => {
            warn!(error = %e, id, "Failed to load activity");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn api_create_activity(
    State(state): State<Arc<AppState>>,
    _gate: AdminGate,
    Json(draft): Json<ActivityDraft>,
) -> impl IntoResponse {
    match state.store.create(draft) {
        Ok(activity) => (StatusCode::CREATED, Json(activity)).into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to create activity");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn api_update_activity(
    State(state): State<Arc<AppState>>,
    _gate: AdminGate,
    Path(id): Path<String>,
    Json(patch): Json<ActivityPatch>,
) -> impl IntoResponse {
    match state.store.update(&id, patch) {
        Ok(activity) => Json(activity).into_response(),
        Err(PlayshelfError::NotFound { .. }) => not_found(&id),
        Err(e) => {
            warn!(error = %e, id, "Failed to update activity");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn api_delete_activity(
    State(state): State<Arc<AppState>>,
    _gate: AdminGate,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(PlayshelfError::NotFound { .. }) => not_found(&id),
        Err(e) => {
            warn!(error = %e, id, "Failed to delete activity");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

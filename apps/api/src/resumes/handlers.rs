use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::record::ResumeRecord;
use crate::state::AppState;

/// GET /api/resumes — all records, newest-first.
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /api/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(record))
}

/// DELETE /api/resumes/:id — idempotent.
pub async fn handle_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/resumes — wipes the whole collection.
pub async fn handle_wipe(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.wipe().await?;
    Ok(StatusCode::NO_CONTENT)
}

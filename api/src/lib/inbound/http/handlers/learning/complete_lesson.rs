use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn complete_lesson(
    State(state): State<AppState>,
    Path((module_id, lesson_id)): Path<(i64, i64)>,
) -> Result<ApiSuccess<CompleteLessonResponseData>, ApiError> {
    // Validates the pair exists; completion itself is not tracked server-side
    state
        .catalog
        .lesson(module_id, lesson_id)
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CompleteLessonResponseData {
            message: "Lesson completed successfully".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteLessonResponseData {
    pub message: String,
}

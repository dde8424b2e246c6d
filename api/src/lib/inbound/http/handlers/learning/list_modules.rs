use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::catalog::models::LearningModule;
use crate::inbound::http::router::AppState;

pub async fn list_modules(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<LearningModule>>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        state.catalog.modules().to_vec(),
    ))
}

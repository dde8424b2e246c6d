use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::catalog::models::LearningModule;
use crate::inbound::http::router::AppState;

pub async fn get_module(
    State(state): State<AppState>,
    Path(module_id): Path<i64>,
) -> Result<ApiSuccess<LearningModule>, ApiError> {
    let module = state.catalog.module(module_id).map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, module.clone()))
}

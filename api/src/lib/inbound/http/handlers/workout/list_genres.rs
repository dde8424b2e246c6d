use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_genres(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<String>>, ApiError> {
    let genres = state
        .catalog
        .genres()
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(ApiSuccess::new(StatusCode::OK, genres))
}

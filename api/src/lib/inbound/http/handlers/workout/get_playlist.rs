use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::catalog::models::PlaylistTrack;
use crate::inbound::http::router::AppState;

pub async fn get_playlist(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> Result<ApiSuccess<Vec<PlaylistTrack>>, ApiError> {
    let tracks = state.catalog.playlist(&genre).map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, tracks.to_vec()))
}

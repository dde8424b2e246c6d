use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::finance::models::FinanceSummary;
use crate::domain::finance::ports::FinanceServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn transaction_summary(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<ApiSuccess<FinanceSummary>, ApiError> {
    state
        .finance_service
        .summary(current.user.id)
        .await
        .map_err(ApiError::from)
        .map(|summary| ApiSuccess::new(StatusCode::OK, summary))
}

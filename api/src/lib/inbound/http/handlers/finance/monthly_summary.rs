use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::finance::models::MonthTotals;
use crate::domain::finance::ports::FinanceServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn monthly_summary(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<ApiSuccess<BTreeMap<String, MonthTotals>>, ApiError> {
    state
        .finance_service
        .monthly_breakdown(current.user.id)
        .await
        .map_err(ApiError::from)
        .map(|months| ApiSuccess::new(StatusCode::OK, months))
}

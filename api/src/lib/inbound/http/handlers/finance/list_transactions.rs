use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::TransactionData;
use crate::domain::finance::ports::FinanceServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_transactions(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<TransactionData>>, ApiError> {
    let transactions = state
        .finance_service
        .list_transactions(current.user.id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        transactions.iter().map(TransactionData::from).collect(),
    ))
}

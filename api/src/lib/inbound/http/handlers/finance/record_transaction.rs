use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::TransactionData;
use crate::domain::finance::errors::AmountError;
use crate::domain::finance::errors::TransactionKindError;
use crate::domain::finance::models::Amount;
use crate::domain::finance::models::RecordTransactionCommand;
use crate::domain::finance::ports::FinanceServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn record_transaction(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<RecordTransactionRequestBody>,
) -> Result<ApiSuccess<TransactionData>, ApiError> {
    state
        .finance_service
        .record_transaction(current.user.id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref transaction| ApiSuccess::new(StatusCode::CREATED, transaction.into()))
}

/// HTTP request body for recording a transaction (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordTransactionRequestBody {
    kind: String,
    category: String,
    amount: f64,
    description: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRecordTransactionRequestError {
    #[error("Invalid transaction kind: {0}")]
    Kind(#[from] TransactionKindError),

    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),
}

impl RecordTransactionRequestBody {
    fn try_into_command(
        self,
    ) -> Result<RecordTransactionCommand, ParseRecordTransactionRequestError> {
        let kind = self.kind.parse()?;
        let amount = Amount::new(self.amount)?;
        Ok(RecordTransactionCommand {
            kind,
            category: self.category,
            amount,
            description: self.description,
        })
    }
}

impl From<ParseRecordTransactionRequestError> for ApiError {
    fn from(err: ParseRecordTransactionRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn welcome() -> ApiSuccess<MessageData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: "Welcome to Success Path API".to_string(),
        },
    )
}

pub async fn daily_quote(State(state): State<AppState>) -> ApiSuccess<QuoteData> {
    ApiSuccess::new(
        StatusCode::OK,
        QuoteData {
            quote: state.catalog.daily_quote().to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteData {
    pub quote: String,
}

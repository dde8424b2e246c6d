pub mod list_transactions;
pub mod monthly_summary;
pub mod record_transaction;
pub mod transaction_summary;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::finance::models::Transaction;

/// Wire representation of one transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionData {
    pub id: String,
    pub kind: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl From<&Transaction> for TransactionData {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id.to_string(),
            kind: transaction.kind.as_str().to_string(),
            category: transaction.category.clone(),
            amount: transaction.amount.value(),
            description: transaction.description.clone(),
            occurred_at: transaction.occurred_at,
        }
    }
}

use thiserror::Error;

/// Error for TransactionKind parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionKindError {
    #[error("Unknown transaction kind: {0} (expected \"income\" or \"expense\")")]
    Unknown(String),
}

/// Error for transaction amount validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AmountError {
    #[error("Transaction amount must be a positive number, got {0}")]
    NotPositive(f64),
}

/// Top-level error for finance operations
#[derive(Debug, Clone, Error)]
pub enum FinanceError {
    #[error("Invalid transaction kind: {0}")]
    InvalidKind(#[from] TransactionKindError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::finance::errors::FinanceError;
use crate::domain::finance::models::FinanceSummary;
use crate::domain::finance::models::MonthTotals;
use crate::domain::finance::models::RecordTransactionCommand;
use crate::domain::finance::models::Transaction;
use crate::domain::user::models::UserId;

/// Port for finance domain service operations.
///
/// Every operation is scoped to one user; records never leak across owners.
#[async_trait]
pub trait FinanceServicePort: Send + Sync + 'static {
    /// Record a new transaction for `user_id`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn record_transaction(
        &self,
        user_id: UserId,
        command: RecordTransactionCommand,
    ) -> Result<Transaction, FinanceError>;

    /// All of the user's transactions, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_transactions(&self, user_id: UserId) -> Result<Vec<Transaction>, FinanceError>;

    /// Income/expense totals over the trailing 30 days.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn summary(&self, user_id: UserId) -> Result<FinanceSummary, FinanceError>;

    /// Trailing-180-day totals bucketed by `YYYY-MM`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn monthly_breakdown(
        &self,
        user_id: UserId,
    ) -> Result<BTreeMap<String, MonthTotals>, FinanceError>;
}

/// Persistence operations for transactions.
#[async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
    /// Persist a new transaction.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, transaction: Transaction) -> Result<Transaction, FinanceError>;

    /// All transactions owned by `user_id`, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Transaction>, FinanceError>;

    /// Transactions owned by `user_id` occurring at or after `cutoff`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_since(
        &self,
        user_id: &UserId,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, FinanceError>;
}

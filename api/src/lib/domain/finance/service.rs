use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Datelike;
use chrono::Duration;
use chrono::Utc;

use crate::domain::finance::errors::FinanceError;
use crate::domain::finance::models::FinanceSummary;
use crate::domain::finance::models::MonthTotals;
use crate::domain::finance::models::RecordTransactionCommand;
use crate::domain::finance::models::Transaction;
use crate::domain::finance::models::TransactionId;
use crate::domain::finance::models::TransactionKind;
use crate::domain::finance::ports::FinanceServicePort;
use crate::domain::finance::ports::TransactionRepository;
use crate::domain::user::models::UserId;

const SUMMARY_WINDOW_DAYS: i64 = 30;
const MONTHLY_WINDOW_DAYS: i64 = 180;

/// Domain service implementation for finance tracking.
///
/// Rollups are computed in memory from the repository's window queries; the
/// store only filters by owner and time.
pub struct FinanceService<TR>
where
    TR: TransactionRepository,
{
    repository: Arc<TR>,
}

impl<TR> FinanceService<TR>
where
    TR: TransactionRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

fn month_bucket(occurred_at: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", occurred_at.year(), occurred_at.month())
}

#[async_trait]
impl<TR> FinanceServicePort for FinanceService<TR>
where
    TR: TransactionRepository,
{
    async fn record_transaction(
        &self,
        user_id: UserId,
        command: RecordTransactionCommand,
    ) -> Result<Transaction, FinanceError> {
        let transaction = Transaction {
            id: TransactionId::new(),
            user_id,
            kind: command.kind,
            category: command.category,
            amount: command.amount,
            description: command.description,
            occurred_at: Utc::now(),
        };

        self.repository.insert(transaction).await
    }

    async fn list_transactions(&self, user_id: UserId) -> Result<Vec<Transaction>, FinanceError> {
        self.repository.list_for_user(&user_id).await
    }

    async fn summary(&self, user_id: UserId) -> Result<FinanceSummary, FinanceError> {
        let cutoff = Utc::now() - Duration::days(SUMMARY_WINDOW_DAYS);
        let transactions = self.repository.list_since(&user_id, cutoff).await?;

        let mut income = 0.0;
        let mut expenses = 0.0;
        for transaction in &transactions {
            match transaction.kind {
                TransactionKind::Income => income += transaction.amount.value(),
                TransactionKind::Expense => expenses += transaction.amount.value(),
            }
        }

        Ok(FinanceSummary {
            income,
            expenses,
            balance: income - expenses,
        })
    }

    async fn monthly_breakdown(
        &self,
        user_id: UserId,
    ) -> Result<BTreeMap<String, MonthTotals>, FinanceError> {
        let cutoff = Utc::now() - Duration::days(MONTHLY_WINDOW_DAYS);
        let transactions = self.repository.list_since(&user_id, cutoff).await?;

        let mut months: BTreeMap<String, MonthTotals> = BTreeMap::new();
        for transaction in &transactions {
            let totals = months.entry(month_bucket(transaction.occurred_at)).or_default();
            match transaction.kind {
                TransactionKind::Income => totals.income += transaction.amount.value(),
                TransactionKind::Expense => totals.expenses += transaction.amount.value(),
            }
        }

        Ok(months)
    }
}

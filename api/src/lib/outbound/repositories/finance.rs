use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::finance::errors::FinanceError;
use crate::domain::finance::models::Amount;
use crate::domain::finance::models::Transaction;
use crate::domain::finance::models::TransactionId;
use crate::domain::finance::models::TransactionKind;
use crate::domain::finance::ports::TransactionRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TransactionRow {
    id: Uuid,
    user_id: Uuid,
    kind: String,
    category: String,
    amount: f64,
    description: Option<String>,
    occurred_at: DateTime<Utc>,
}

impl TransactionRow {
    fn into_transaction(self) -> Result<Transaction, FinanceError> {
        let kind = self
            .kind
            .parse::<TransactionKind>()
            .map_err(|e| FinanceError::DatabaseError(format!("Corrupt kind column: {}", e)))?;
        let amount = Amount::new(self.amount)
            .map_err(|e| FinanceError::DatabaseError(format!("Corrupt amount column: {}", e)))?;

        Ok(Transaction {
            id: TransactionId(self.id),
            user_id: UserId(self.user_id),
            kind,
            category: self.category,
            amount,
            description: self.description,
            occurred_at: self.occurred_at,
        })
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn insert(&self, transaction: Transaction) -> Result<Transaction, FinanceError> {
        sqlx::query(
            r#"
            INSERT INTO transactions (id, user_id, kind, category, amount, description, occurred_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(transaction.id.0)
        .bind(transaction.user_id.0)
        .bind(transaction.kind.as_str())
        .bind(&transaction.category)
        .bind(transaction.amount.value())
        .bind(&transaction.description)
        .bind(transaction.occurred_at)
        .execute(&self.pool)
        .await
        .map_err(|e| FinanceError::DatabaseError(e.to_string()))?;

        Ok(transaction)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Transaction>, FinanceError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, user_id, kind, category, amount, description, occurred_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY occurred_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FinanceError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(TransactionRow::into_transaction)
            .collect()
    }

    async fn list_since(
        &self,
        user_id: &UserId,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, FinanceError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, user_id, kind, category, amount, description, occurred_at
            FROM transactions
            WHERE user_id = $1 AND occurred_at >= $2
            ORDER BY occurred_at DESC
            "#,
        )
        .bind(user_id.0)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FinanceError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(TransactionRow::into_transaction)
            .collect()
    }
}

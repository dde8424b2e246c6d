use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::activity::errors::ActivityError;
use crate::domain::activity::models::Activity;
use crate::domain::activity::ports::ActivityRepository;

pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn insert(&self, activity: Activity) -> Result<Activity, ActivityError> {
        sqlx::query(
            r#"
            INSERT INTO activities (id, user_id, activity_type, steps, calories, duration_minutes, logged_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(activity.id.0)
        .bind(activity.user_id.0)
        .bind(&activity.activity_type)
        .bind(activity.steps)
        .bind(activity.calories)
        .bind(activity.duration_minutes)
        .bind(activity.logged_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ActivityError::DatabaseError(e.to_string()))?;

        Ok(activity)
    }
}

use async_trait::async_trait;

use crate::domain::activity::errors::ActivityError;
use crate::domain::activity::models::Activity;
use crate::domain::activity::models::DailyStats;
use crate::domain::activity::models::LogActivityCommand;
use crate::domain::activity::models::WeeklyStats;
use crate::domain::user::models::UserId;

/// Port for activity domain service operations.
#[async_trait]
pub trait ActivityServicePort: Send + Sync + 'static {
    /// Persist a new activity log entry for `user_id`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn log_activity(
        &self,
        user_id: UserId,
        command: LogActivityCommand,
    ) -> Result<Activity, ActivityError>;

    /// Today's dashboard numbers for `user_id`.
    async fn daily_stats(&self, user_id: UserId) -> Result<DailyStats, ActivityError>;

    /// The trailing week of dashboard series for `user_id`.
    async fn weekly_stats(&self, user_id: UserId) -> Result<WeeklyStats, ActivityError>;
}

/// Persistence operations for activity log entries.
#[async_trait]
pub trait ActivityRepository: Send + Sync + 'static {
    /// Persist a new activity entry.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, activity: Activity) -> Result<Activity, ActivityError>;
}

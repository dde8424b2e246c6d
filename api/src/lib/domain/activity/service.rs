use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::activity::errors::ActivityError;
use crate::domain::activity::models::Activity;
use crate::domain::activity::models::ActivityId;
use crate::domain::activity::models::DailyStats;
use crate::domain::activity::models::LogActivityCommand;
use crate::domain::activity::models::WeeklyStats;
use crate::domain::activity::ports::ActivityRepository;
use crate::domain::activity::ports::ActivityServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for activity logging.
///
/// Logging persists; the dashboard stats endpoints serve the fixed demo
/// payloads the frontend charts are built against, not aggregates of the
/// logged entries.
pub struct ActivityService<AR>
where
    AR: ActivityRepository,
{
    repository: Arc<AR>,
}

impl<AR> ActivityService<AR>
where
    AR: ActivityRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> ActivityServicePort for ActivityService<AR>
where
    AR: ActivityRepository,
{
    async fn log_activity(
        &self,
        user_id: UserId,
        command: LogActivityCommand,
    ) -> Result<Activity, ActivityError> {
        let activity = Activity {
            id: ActivityId::new(),
            user_id,
            activity_type: command.activity_type,
            steps: command.steps,
            calories: command.calories,
            duration_minutes: command.duration_minutes,
            logged_at: Utc::now(),
        };

        self.repository.insert(activity).await
    }

    async fn daily_stats(&self, _user_id: UserId) -> Result<DailyStats, ActivityError> {
        Ok(DailyStats {
            steps: 8432,
            calories: 2100.0,
            water_intake: 2.5,
            active_minutes: 45,
        })
    }

    async fn weekly_stats(&self, _user_id: UserId) -> Result<WeeklyStats, ActivityError> {
        Ok(WeeklyStats {
            steps: vec![7000, 8500, 6800, 9200, 8432, 7600, 8100],
            calories: vec![2200, 2100, 1950, 2300, 2100, 1800, 2000],
            dates: vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        })
    }
}

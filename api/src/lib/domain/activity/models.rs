use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::user::models::UserId;

/// One logged workout or movement session.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: ActivityId,
    pub user_id: UserId,
    pub activity_type: String,
    pub steps: Option<i32>,
    pub calories: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub logged_at: DateTime<Utc>,
}

/// Activity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityId(pub Uuid);

impl ActivityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to log a new activity for the current user
#[derive(Debug)]
pub struct LogActivityCommand {
    pub activity_type: String,
    pub steps: Option<i32>,
    pub calories: Option<f64>,
    pub duration_minutes: Option<i32>,
}

/// Today's headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStats {
    pub steps: i32,
    pub calories: f64,
    pub water_intake: f64,
    pub active_minutes: i32,
}

/// One week of per-day series, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStats {
    pub steps: Vec<i32>,
    pub calories: Vec<i32>,
    pub dates: Vec<&'static str>,
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::activity::models::Activity;
use crate::domain::activity::models::LogActivityCommand;
use crate::domain::activity::ports::ActivityServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn log_activity(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<LogActivityRequestBody>,
) -> Result<ApiSuccess<ActivityData>, ApiError> {
    let command = LogActivityCommand {
        activity_type: body.activity_type,
        steps: body.steps,
        calories: body.calories,
        duration_minutes: body.duration_minutes,
    };

    state
        .activity_service
        .log_activity(current.user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref activity| ApiSuccess::new(StatusCode::CREATED, activity.into()))
}

/// HTTP request body for logging an activity (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogActivityRequestBody {
    activity_type: String,
    steps: Option<i32>,
    calories: Option<f64>,
    duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityData {
    pub id: String,
    pub activity_type: String,
    pub steps: Option<i32>,
    pub calories: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub logged_at: DateTime<Utc>,
}

impl From<&Activity> for ActivityData {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.to_string(),
            activity_type: activity.activity_type.clone(),
            steps: activity.steps,
            calories: activity.calories,
            duration_minutes: activity.duration_minutes,
            logged_at: activity.logged_at,
        }
    }
}

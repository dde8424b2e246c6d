use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::user::models::Goals;
use crate::domain::user::models::NotificationPrefs;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::CurrentUser;

pub async fn get_profile(
    Extension(current): Extension<CurrentUser>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ProfileResponseData::from(&current.user),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub username: String,
    pub email: String,
    pub goals: Goals,
    pub notifications: NotificationPrefs,
}

impl From<&User> for ProfileResponseData {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            // Untouched settings render as the documented defaults
            goals: user.goals.clone().unwrap_or_default(),
            notifications: user.notifications.clone().unwrap_or_default(),
        }
    }
}

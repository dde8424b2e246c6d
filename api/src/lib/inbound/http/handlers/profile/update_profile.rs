use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::get_profile::ProfileResponseData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Goals;
use crate::domain::user::models::NotificationPrefs;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::UsernameError;

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<UpdateProfileRequestBody>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .update_profile(&current.user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// HTTP request body for partial profile updates (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequestBody {
    username: Option<String>,
    email: Option<String>,
    goals: Option<Goals>,
    notifications: Option<NotificationPrefs>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateProfileRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl UpdateProfileRequestBody {
    fn try_into_command(self) -> Result<UpdateProfileCommand, ParseUpdateProfileRequestError> {
        let username = self.username.map(Username::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        Ok(UpdateProfileCommand {
            username,
            email,
            goals: self.goals,
            notifications: self.notifications,
        })
    }
}

impl From<ParseUpdateProfileRequestError> for ApiError {
    fn from(err: ParseUpdateProfileRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

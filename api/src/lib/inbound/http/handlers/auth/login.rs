use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::super::ApiError;
use super::super::INCORRECT_CREDENTIALS;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// `POST /auth/token` - the login transition.
///
/// Takes the standard form-encoded credential pair and answers with a bare
/// token object. Unknown-username and wrong-password failures produce the
/// same response; the specific cause only reaches the logs.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginRequestBody>,
) -> Result<Json<TokenResponseBody>, ApiError> {
    let rejected = || ApiError::Unauthorized(INCORRECT_CREDENTIALS.to_string());

    let username = Username::new(body.username).map_err(|e| {
        tracing::warn!(error = %e, "Login rejected: identifier not a valid username");
        rejected()
    })?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                tracing::warn!("Login rejected: unknown username");
                rejected()
            }
            other => ApiError::from(other),
        })?;

    let issued = state
        .auth_gate
        .login(user.username.as_str(), &body.password, &user.password_hash)
        .map_err(|e| match e {
            auth::AuthError::InvalidCredentials => {
                tracing::warn!("Login rejected: password mismatch");
                rejected()
            }
            auth::AuthError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthError::Token(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(Json(TokenResponseBody {
        access_token: issued.token,
        token_type: "bearer".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseBody {
    pub access_token: String,
    pub token_type: String,
}

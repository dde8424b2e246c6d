use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::COULD_NOT_VALIDATE;
use crate::inbound::http::router::AppState;

/// Identity attached to the request once the bearer transition succeeds.
///
/// Built fresh for every request and dropped when handling completes;
/// nothing about it is cached across requests.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The `sub` claim the token asserted
    pub subject: String,
    /// The user that subject resolved to
    pub user: User,
}

/// Middleware guarding protected routes.
///
/// Validates the bearer token, then resolves its subject against the user
/// store. Every failure along the way collapses into the same generic 401
/// with a `WWW-Authenticate: Bearer` challenge; only the logs keep the
/// specific reason.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.auth_gate.verify_bearer(token).map_err(|e| {
        tracing::warn!(error = %e, "Bearer token rejected");
        challenge_response()
    })?;

    let username = Username::new(claims.sub.clone()).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid username");
        challenge_response()
    })?;

    // Resolve identity on every request; no caching, staleness bound is zero
    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Token subject did not resolve to a user");
            challenge_response()
        })?;

    req.extensions_mut().insert(CurrentUser {
        subject: claims.sub,
        user,
    });

    Ok(next.run(req).await)
}

fn challenge_response() -> Response {
    ApiError::Unauthorized(COULD_NOT_VALIDATE.to_string()).into_response()
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::debug!("Missing Authorization header");
            challenge_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not valid UTF-8");
        challenge_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::debug!("Authorization header is not a bearer scheme");
        challenge_response()
    })
}

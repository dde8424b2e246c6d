use std::sync::Arc;
use std::time::Duration;

use auth::AuthGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::activities::daily_stats::daily_stats;
use super::handlers::activities::log_activity::log_activity;
use super::handlers::activities::weekly_stats::weekly_stats;
use super::handlers::auth::login::login;
use super::handlers::auth::register::register;
use super::handlers::finance::list_transactions::list_transactions;
use super::handlers::finance::monthly_summary::monthly_summary;
use super::handlers::finance::record_transaction::record_transaction;
use super::handlers::finance::transaction_summary::transaction_summary;
use super::handlers::learning::complete_lesson::complete_lesson;
use super::handlers::learning::get_module::get_module;
use super::handlers::learning::list_modules::list_modules;
use super::handlers::meta::daily_quote;
use super::handlers::meta::welcome;
use super::handlers::profile::get_profile::get_profile;
use super::handlers::profile::update_profile::update_profile;
use super::handlers::workout::get_playlist::get_playlist;
use super::handlers::workout::list_genres::list_genres;
use super::middleware::authenticate as auth_middleware;
use crate::domain::activity::service::ActivityService;
use crate::domain::catalog::service::CatalogService;
use crate::domain::finance::service::FinanceService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::activity::PostgresActivityRepository;
use crate::outbound::repositories::finance::PostgresTransactionRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub finance_service: Arc<FinanceService<PostgresTransactionRepository>>,
    pub activity_service: Arc<ActivityService<PostgresActivityRepository>>,
    pub catalog: Arc<CatalogService>,
    pub auth_gate: Arc<AuthGate>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    finance_service: Arc<FinanceService<PostgresTransactionRepository>>,
    activity_service: Arc<ActivityService<PostgresActivityRepository>>,
    catalog: Arc<CatalogService>,
    auth_gate: Arc<AuthGate>,
) -> Router {
    let state = AppState {
        user_service,
        finance_service,
        activity_service,
        catalog,
        auth_gate,
    };

    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/quotes/daily", get(daily_quote))
        .route("/auth/token", post(login))
        .route("/auth/register", post(register));

    let protected_routes = Router::new()
        .route("/profile/me", get(get_profile).put(update_profile))
        .route(
            "/finance/transactions",
            post(record_transaction).get(list_transactions),
        )
        .route("/finance/transactions/summary", get(transaction_summary))
        .route("/finance/transactions/monthly", get(monthly_summary))
        .route("/activities", post(log_activity))
        .route("/activities/daily", get(daily_stats))
        .route("/activities/weekly", get(weekly_stats))
        .route("/workout/music/genres", get(list_genres))
        .route("/workout/music/:genre", get(get_playlist))
        .route("/learning/modules", get(list_modules))
        .route("/learning/modules/:module_id", get(get_module))
        .route(
            "/learning/modules/:module_id/lessons/:lesson_id/complete",
            post(complete_lesson),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

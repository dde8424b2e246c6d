use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use api::config::Config;
use api::domain::activity::service::ActivityService;
use api::domain::catalog::service::CatalogService;
use api::domain::finance::service::FinanceService;
use api::domain::user::service::UserService;
use api::inbound::http::router::create_router;
use api::outbound::repositories::PostgresActivityRepository;
use api::outbound::repositories::PostgresTransactionRepository;
use api::outbound::repositories::PostgresUserRepository;
use auth::AuthGate;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "success-path-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.auth.token_ttl_minutes,
        algorithm = %config.auth.algorithm,
        "Configuration loaded"
    );

    // The gate validates the signing key; a bad key means no serving at all
    let auth_gate = Arc::new(
        AuthGate::new(
            config.auth.secret.as_bytes(),
            config.auth.token_ttl_minutes,
        )
        .context("Auth secret key rejected")?,
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let transaction_repository = Arc::new(PostgresTransactionRepository::new(pg_pool.clone()));
    let activity_repository = Arc::new(PostgresActivityRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let finance_service = Arc::new(FinanceService::new(transaction_repository));
    let activity_service = Arc::new(ActivityService::new(activity_repository));
    let catalog = Arc::new(CatalogService::new());

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        user_service,
        finance_service,
        activity_service,
        catalog,
        auth_gate,
    );

    axum::serve(http_listener, application).await?;

    Ok(())
}

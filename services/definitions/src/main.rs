use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use kamus_core::config::Config as _;
use kamus_core::tracing::init_tracing;

use kamus_definitions::config::DefinitionsConfig;
use kamus_definitions::router::build_router;
use kamus_definitions::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,sqlx=warn");

    let config = DefinitionsConfig::from_env().context("failed to load configuration")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState {
        db,
        policy: config.authorization_policy,
        allow_anonymous_delete: config.allow_anonymous_delete,
    };
    info!(
        policy = ?state.policy,
        allow_anonymous_delete = state.allow_anonymous_delete,
        "authorization settings"
    );

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.definitions_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("definitions service listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}

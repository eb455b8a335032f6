use anyhow::{Context, Result};
use clubhouse::{
    abstract_trait::DynSessionStore,
    config::{Config, ConnectionManager},
    handler::app_router,
    state::AppState,
    utils::init_logger,
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    init_logger();

    let config = Config::init().context("Failed to load configuration")?;

    info!("Starting server initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to migrate database")?;
    }

    let state = Arc::new(AppState::new(db_pool, &config));

    tokio::spawn(run_session_sweeper(state.di_container.sessions.clone()));

    let app = app_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind listener on {addr}"))?;

    info!("🚀 Server running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed to start or serve")?;

    info!("✅ Server shutdown complete.");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Shutdown signal received."),
        Err(err) => error!("Failed to listen for shutdown signal: {err}"),
    }
}

/// The store enforces the session TTL at read time; this loop keeps the
/// table itself from accumulating dead rows.
async fn run_session_sweeper(sessions: DynSessionStore) {
    let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(60));

    loop {
        interval.tick().await;

        match sessions.purge_expired().await {
            Ok(0) => {}
            Ok(purged) => info!("🗑️ Purged {purged} expired session(s)"),
            Err(err) => warn!("Session sweep failed: {err}"),
        }
    }
}

async fn run_migrations(pool: &Pool<Postgres>) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}

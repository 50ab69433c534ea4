use anyhow::Context;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use portal::config::{AppState, Config};
use sea_orm::Database;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portal=info,tower_http=info")),
        )
        .init();

    let cfg = Config::init()?;
    tracing::info!("starting portal");

    // 1. Database
    let db = Database::connect(&cfg.database_url)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None).await.context("failed to run migrations")?;
    tracing::info!("database ready");

    // 2. State + seeders
    let state = AppState::new(db, &cfg);
    if let Err(e) = portal::seeders::run_seeders(&state.storage, &cfg).await {
        tracing::error!("seeding failed: {}", e);
    }

    // 3. Serve
    let app = portal::app(state);
    let addr: SocketAddr = format!("{}:{}", cfg.server_host, cfg.server_port)
        .parse()
        .context("invalid HOST/PORT")?;

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

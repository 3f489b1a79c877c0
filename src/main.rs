//! Server entry point: config from env, pool, DDL, routes.

use agriworld_backend::{
    api_routes, common_routes_with_ready, ensure_tables, AppConfig, AppState, LocalImageStore,
};
use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("agriworld_backend=info")),
        )
        .init();

    let config = AppConfig::from_env();

    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    ensure_tables(&pool).await?;

    let images = LocalImageStore::init(&config.upload_dir).await?;
    let state = AppState {
        pool,
        images: Arc::new(images),
    };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use todo_api::config::Config;
use todo_api::db::PgStore;
use todo_api::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database");
    let store = PgStore::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let app = router::build(Arc::new(store));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}

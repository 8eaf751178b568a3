use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use playshelf_api::{router, AppState};
use playshelf_common::Config;
use playshelf_store::ActivityStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("playshelf=info".parse()?))
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        store: ActivityStore::new(&config.activities_path),
        admin_password: config.admin_password,
    });

    let app = router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Playshelf API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

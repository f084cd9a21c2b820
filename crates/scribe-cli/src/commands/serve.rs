use std::path::Path;

use anyhow::{Context, Result, anyhow};
use scribe_web::{AppState, init_tracing, serve};
use tokio::net::TcpListener;

use crate::utils::{load_config_or_default, open_store};

pub async fn cmd_serve(config_path: &Path) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    init_tracing(&config).map_err(|err| anyhow!("init tracing: {err}"))?;

    let store = open_store(&config).await?;
    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    tracing::info!(
        addr = %config.bind,
        database = %config.database_url,
        media = %config.media_dir().display(),
        "scribe listening"
    );

    serve(AppState::new(store, config), listener)
        .await
        .context("serve")?;
    tracing::info!("scribe stopped");
    Ok(())
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scribe_config::ScribeConfig;
use scribe_store::Store;

/// Load the configuration file, or the defaults when it does not exist.
pub fn load_config_or_default(path: &Path) -> Result<ScribeConfig> {
    if !path.exists() {
        return Ok(ScribeConfig::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: ScribeConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

/// Connect and bring the schema up to date.
pub async fn open_store(config: &ScribeConfig) -> Result<Store> {
    let db = scribe_store::connect(config)
        .await
        .with_context(|| format!("connect to {}", config.database_url))?;
    scribe_store::migrate(&db).await.context("migrate database")?;
    Ok(Store::new(db, config))
}

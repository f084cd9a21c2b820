use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::utils::load_config_or_default;

pub async fn cmd_migrate(config_path: &Path) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    let db = scribe_store::connect(&config)
        .await
        .with_context(|| format!("connect to {}", config.database_url))?;
    let applied = scribe_store::migrate(&db).await.context("migrate database")?;

    println!(
        "{} {} statements against {}",
        "applied".bright_green(),
        applied,
        config.database_url.bright_cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_support::temp_config;

    #[tokio::test]
    async fn migrate_twice_is_fine() {
        let (dir, path) = temp_config();

        cmd_migrate(&path).await.unwrap();
        cmd_migrate(&path).await.unwrap();
        assert!(dir.path().join("cli.db").exists());
    }
}

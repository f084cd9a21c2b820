use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::utils::{load_config_or_default, open_store};

pub async fn cmd_user_add(config_path: &Path, username: &str, email: &str) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    let store = open_store(&config).await?;
    let user = store.create_user(username, email).await?;
    println!("{} user {} (id {})", "created".bright_green(), user.username.bold(), user.id);
    Ok(())
}

pub async fn cmd_user_remove(config_path: &Path, username: &str) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    let store = open_store(&config).await?;
    store.delete_user(username).await?;
    println!("{} user {}", "removed".bright_yellow(), username.bold());
    Ok(())
}

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::utils::{load_config_or_default, open_store};

pub async fn cmd_group_add(
    config_path: &Path,
    slug: &str,
    title: &str,
    description: &str,
) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    let store = open_store(&config).await?;
    let group = store.create_group(title, slug, description).await?;
    println!(
        "{} group {} at /group/{}/",
        "created".bright_green(),
        group.title.bold(),
        group.slug
    );
    Ok(())
}

pub async fn cmd_group_remove(config_path: &Path, slug: &str) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    let store = open_store(&config).await?;
    store.delete_group(slug).await?;
    println!("{} group {}", "removed".bright_yellow(), slug.bold());
    Ok(())
}

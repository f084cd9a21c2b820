use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use scribe_config::ScribeConfig;

pub fn cmd_init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let config = ScribeConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;

    println!("{} {}", "created".bright_green(), path.display());
    Ok(())
}

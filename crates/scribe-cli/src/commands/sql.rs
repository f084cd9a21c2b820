use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use scribe_config::DatabaseBackend;

use crate::utils::load_config_or_default;

/// Print the DDL for `backend`, or for the backend of the configured
/// database URL.
pub fn cmd_sql(config_path: &Path, backend: Option<DatabaseBackend>) -> Result<()> {
    let backend = match backend {
        Some(backend) => backend,
        None => load_config_or_default(config_path)?
            .backend()
            .unwrap_or(DatabaseBackend::Sqlite),
    };

    let statements = scribe_schema::schema_sql(backend).context("render schema")?;
    eprintln!(
        "{} {} statements ({:?})",
        "schema:".bright_cyan().bold(),
        statements.len(),
        backend
    );
    for stmt in statements {
        println!("{stmt};");
    }
    Ok(())
}

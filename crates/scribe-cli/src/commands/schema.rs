use anyhow::{Context, Result};
use schemars::schema_for;
use scribe_config::ScribeConfig;

/// Print the JSON Schema describing `scribe.json`.
pub fn cmd_schema() -> Result<()> {
    let schema = schema_for!(ScribeConfig);
    let json = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{json}");
    Ok(())
}

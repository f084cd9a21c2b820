use serde::{Deserialize, Serialize};

/// Database backend, used to pick the SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Postgres,
    #[cfg_attr(feature = "cli", value(name = "mysql"))]
    MySql,
    Sqlite,
}

impl DatabaseBackend {
    /// Infer the backend from a connection URL scheme.
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split_once(':').map(|(scheme, _)| scheme)?;
        match scheme {
            "postgres" | "postgresql" => Some(DatabaseBackend::Postgres),
            "mysql" | "mariadb" => Some(DatabaseBackend::MySql),
            "sqlite" => Some(DatabaseBackend::Sqlite),
            _ => None,
        }
    }
}

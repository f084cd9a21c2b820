pub mod catalog;
pub mod error;
pub mod schema;
pub mod sql;
pub mod validate;

pub use error::SchemaError;
pub use schema::{ColumnDef, ColumnType, ForeignKeyDef, IndexDef, ReferenceAction, TableDef};
pub use sql::{BuiltQuery, build_schema_queries};
pub use validate::validate_schema;

/// DDL for the full scribe catalogue, rendered for `backend`.
pub fn schema_sql(backend: scribe_config::DatabaseBackend) -> Result<Vec<String>, SchemaError> {
    Ok(build_schema_queries(&catalog::tables())?
        .iter()
        .map(|q| q.build(backend))
        .collect())
}

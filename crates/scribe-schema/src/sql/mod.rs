pub mod create_index;
pub mod create_table;
pub mod helpers;
pub mod types;

pub use create_index::build_create_index;
pub use create_table::build_create_table;
pub use types::BuiltQuery;

use crate::error::SchemaError;
use crate::schema::TableDef;
use crate::validate::validate_schema;

/// Statements that create every table and then every index.
///
/// All statements use `IF NOT EXISTS`, so running them against a database
/// that already has the schema is a no-op.
pub fn build_schema_queries(tables: &[TableDef]) -> Result<Vec<BuiltQuery>, SchemaError> {
    validate_schema(tables)?;

    let mut queries: Vec<BuiltQuery> = tables.iter().map(build_create_table).collect();
    for table in tables {
        queries.extend(table.indexes.iter().map(|index| build_create_index(table, index)));
    }
    Ok(queries)
}

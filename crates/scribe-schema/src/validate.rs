use std::collections::{HashMap, HashSet};

use crate::error::SchemaError;
use crate::schema::{ReferenceAction, TableDef};

/// Validate a table list for integrity issues.
/// Checks for:
/// - Duplicate table or column names
/// - Missing primary keys
/// - Foreign keys referencing non-existent tables or columns
/// - Foreign keys referencing a table that is created later
/// - SET NULL rules on NOT NULL columns
/// - Indexes referencing non-existent columns
pub fn validate_schema(schema: &[TableDef]) -> Result<(), SchemaError> {
    let mut table_names = HashSet::new();
    for table in schema {
        if !table_names.insert(table.name.as_str()) {
            return Err(SchemaError::DuplicateTableName(table.name.clone()));
        }
    }

    let positions: HashMap<&str, usize> = schema
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.as_str(), i))
        .collect();

    for (position, table) in schema.iter().enumerate() {
        validate_table(table, position, schema, &positions)?;
    }

    Ok(())
}

fn validate_table(
    table: &TableDef,
    position: usize,
    schema: &[TableDef],
    positions: &HashMap<&str, usize>,
) -> Result<(), SchemaError> {
    let mut columns = HashSet::new();
    for column in &table.columns {
        if !columns.insert(column.name.as_str()) {
            return Err(SchemaError::DuplicateColumnName(
                table.name.clone(),
                column.name.clone(),
            ));
        }
    }

    if !table.columns.iter().any(|c| c.primary_key) {
        return Err(SchemaError::MissingPrimaryKey(table.name.clone()));
    }

    for column in &table.columns {
        let Some(fk) = &column.foreign_key else {
            continue;
        };

        let Some(&ref_position) = positions.get(fk.ref_table.as_str()) else {
            return Err(SchemaError::ForeignKeyTableNotFound(
                table.name.clone(),
                column.name.clone(),
                fk.ref_table.clone(),
            ));
        };
        // self references are allowed; anything else must already exist
        if ref_position > position {
            return Err(SchemaError::ForwardReference(
                table.name.clone(),
                column.name.clone(),
                fk.ref_table.clone(),
            ));
        }
        if schema[ref_position].column(&fk.ref_column).is_none() {
            return Err(SchemaError::ForeignKeyColumnNotFound(
                table.name.clone(),
                column.name.clone(),
                fk.ref_table.clone(),
                fk.ref_column.clone(),
            ));
        }
        if fk.on_delete == ReferenceAction::SetNull && !column.nullable {
            return Err(SchemaError::SetNullOnRequiredColumn(
                table.name.clone(),
                column.name.clone(),
            ));
        }
    }

    for index in &table.indexes {
        if index.columns.is_empty() {
            return Err(SchemaError::EmptyIndexColumns(table.name.clone()));
        }
        for col in &index.columns {
            if !columns.contains(col.as_str()) {
                return Err(SchemaError::IndexColumnNotFound(
                    table.name.clone(),
                    col.clone(),
                ));
            }
        }
    }

    Ok(())
}

use sea_query::{
    Alias, ColumnDef as SeaColumnDef, ForeignKeyAction, MysqlQueryBuilder, PostgresQueryBuilder,
    SchemaStatementBuilder, SqliteQueryBuilder,
};

use scribe_config::DatabaseBackend;

use crate::schema::{ColumnDef, ColumnType, ReferenceAction};

/// Helper function to convert a schema statement to SQL for a specific backend
pub fn build_schema_statement<T: SchemaStatementBuilder>(
    stmt: &T,
    backend: DatabaseBackend,
) -> String {
    match backend {
        DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
        DatabaseBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
    }
}

/// Apply a catalogue ColumnType to a sea_query ColumnDef
pub fn apply_column_type(col: &mut SeaColumnDef, ty: &ColumnType) {
    match ty {
        ColumnType::Integer => {
            col.integer();
        }
        ColumnType::Text => {
            col.text();
        }
        ColumnType::Varchar { length } => {
            col.string_len(*length);
        }
        ColumnType::Timestamptz => {
            col.timestamp_with_time_zone();
        }
    }
}

pub fn to_sea_fk_action(action: &ReferenceAction) -> ForeignKeyAction {
    match action {
        ReferenceAction::Cascade => ForeignKeyAction::Cascade,
        ReferenceAction::Restrict => ForeignKeyAction::Restrict,
        ReferenceAction::SetNull => ForeignKeyAction::SetNull,
        ReferenceAction::NoAction => ForeignKeyAction::NoAction,
    }
}

/// Build a sea_query ColumnDef, including inline primary key and unique flags.
pub fn build_sea_column_def(column: &ColumnDef) -> SeaColumnDef {
    let mut col = SeaColumnDef::new(Alias::new(&column.name));
    apply_column_type(&mut col, &column.r#type);

    if !column.nullable {
        col.not_null();
    }
    if column.primary_key {
        col.auto_increment().primary_key();
    }
    if column.unique {
        col.unique_key();
    }

    col
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate table name: {0}")]
    DuplicateTableName(String),
    #[error("duplicate column name: {0}.{1}")]
    DuplicateColumnName(String, String),
    #[error("table '{0}' must have a primary key")]
    MissingPrimaryKey(String),
    #[error("foreign key references non-existent table: {0}.{1} -> {2}")]
    ForeignKeyTableNotFound(String, String, String),
    #[error("foreign key references non-existent column: {0}.{1} -> {2}.{3}")]
    ForeignKeyColumnNotFound(String, String, String, String),
    #[error("foreign key references a table declared later: {0}.{1} -> {2}")]
    ForwardReference(String, String, String),
    #[error("SET NULL on a NOT NULL column: {0}.{1}")]
    SetNullOnRequiredColumn(String, String),
    #[error("index references non-existent column: {0} -> {1}")]
    IndexColumnNotFound(String, String),
    #[error("index has empty column list on table {0}")]
    EmptyIndexColumns(String),
}

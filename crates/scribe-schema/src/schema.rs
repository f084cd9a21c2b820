//! Declarative description of tables, columns, indexes, and foreign keys.

/// Column storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    Varchar { length: u32 },
    Timestamptz,
}

/// What happens to referencing rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceAction {
    Cascade,
    Restrict,
    SetNull,
    NoAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub ref_table: String,
    pub ref_column: String,
    pub on_delete: ReferenceAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub r#type: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub foreign_key: Option<ForeignKeyDef>,
}

impl ColumnDef {
    /// A required column with no constraints.
    pub fn new(name: &str, ty: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            r#type: ty,
            nullable: false,
            primary_key: false,
            unique: false,
            foreign_key: None,
        }
    }

    /// Auto-incrementing integer primary key named `id`.
    pub fn id() -> Self {
        Self {
            primary_key: true,
            ..Self::new("id", ColumnType::Integer)
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Integer column referencing `ref_table.id`.
    pub fn references(name: &str, ref_table: &str, on_delete: ReferenceAction) -> Self {
        Self {
            foreign_key: Some(ForeignKeyDef {
                ref_table: ref_table.to_string(),
                ref_column: "id".to_string(),
                on_delete,
            }),
            ..Self::new(name, ColumnType::Integer)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexDef {
    pub fn on(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            unique: false,
        }
    }

    pub fn unique_on(columns: &[&str]) -> Self {
        Self {
            unique: true,
            ..Self::on(columns)
        }
    }

    /// `ix_<table>__<cols>` or `uq_<table>__<cols>`.
    pub fn name(&self, table: &str) -> String {
        if self.unique {
            scribe_naming::build_unique_constraint_name(table, &self.columns)
        } else {
            scribe_naming::build_index_name(table, &self.columns)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub indexes: Vec<IndexDef>,
}

impl TableDef {
    pub fn new(name: &str, columns: Vec<ColumnDef>, indexes: Vec<IndexDef>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            indexes,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

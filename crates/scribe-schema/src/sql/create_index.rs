use sea_query::{Alias, Index};

use super::types::BuiltQuery;
use crate::schema::{IndexDef, TableDef};

pub fn build_create_index(table: &TableDef, index: &IndexDef) -> BuiltQuery {
    let mut stmt = Index::create()
        .name(index.name(&table.name))
        .table(Alias::new(&table.name))
        .if_not_exists()
        .to_owned();

    for col in &index.columns {
        stmt = stmt.col(Alias::new(col)).to_owned();
    }

    if index.unique {
        stmt = stmt.unique().to_owned();
    }

    BuiltQuery::CreateIndex(Box::new(stmt))
}

use sea_query::{Alias, ForeignKey, Table};

use scribe_naming::build_foreign_key_name;

use super::helpers::{build_sea_column_def, to_sea_fk_action};
use super::types::BuiltQuery;
use crate::schema::TableDef;

pub fn build_create_table(table: &TableDef) -> BuiltQuery {
    let mut stmt = Table::create()
        .table(Alias::new(&table.name))
        .if_not_exists()
        .to_owned();

    for column in &table.columns {
        stmt = stmt.col(build_sea_column_def(column)).to_owned();
    }

    for column in &table.columns {
        let Some(fk_def) = &column.foreign_key else {
            continue;
        };
        let mut fk = ForeignKey::create()
            .name(build_foreign_key_name(&table.name, std::slice::from_ref(&column.name)))
            .from_tbl(Alias::new(&table.name))
            .from_col(Alias::new(&column.name))
            .to_tbl(Alias::new(&fk_def.ref_table))
            .to_col(Alias::new(&fk_def.ref_column))
            .on_delete(to_sea_fk_action(&fk_def.on_delete))
            .to_owned();
        stmt = stmt.foreign_key(&mut fk).to_owned();
    }

    BuiltQuery::CreateTable(Box::new(stmt))
}

//! The scribe tables, in dependency order.

use crate::schema::{ColumnDef, ColumnType, IndexDef, ReferenceAction, TableDef};

pub const USERS: &str = "users";
pub const GROUPS: &str = "groups";
pub const POSTS: &str = "posts";
pub const COMMENTS: &str = "comments";
pub const FOLLOWS: &str = "follows";

/// Every table, each after the tables it references.
pub fn tables() -> Vec<TableDef> {
    vec![users(), groups(), posts(), comments(), follows()]
}

fn users() -> TableDef {
    TableDef::new(
        USERS,
        vec![
            ColumnDef::id(),
            ColumnDef::new("username", ColumnType::Varchar { length: 150 }).unique(),
            ColumnDef::new("email", ColumnType::Varchar { length: 254 }),
            ColumnDef::new("date_joined", ColumnType::Timestamptz),
        ],
        vec![],
    )
}

fn groups() -> TableDef {
    TableDef::new(
        GROUPS,
        vec![
            ColumnDef::id(),
            ColumnDef::new("title", ColumnType::Varchar { length: 200 }),
            ColumnDef::new("slug", ColumnType::Varchar { length: 50 }).unique(),
            ColumnDef::new("description", ColumnType::Text),
        ],
        vec![],
    )
}

fn posts() -> TableDef {
    TableDef::new(
        POSTS,
        vec![
            ColumnDef::id(),
            ColumnDef::new("text", ColumnType::Text),
            ColumnDef::new("pub_date", ColumnType::Timestamptz),
            ColumnDef::references("author_id", USERS, ReferenceAction::Cascade),
            ColumnDef::references("group_id", GROUPS, ReferenceAction::SetNull).nullable(),
            ColumnDef::new("image", ColumnType::Varchar { length: 100 }).nullable(),
        ],
        vec![
            IndexDef::on(&["pub_date"]),
            IndexDef::on(&["author_id"]),
            IndexDef::on(&["group_id"]),
        ],
    )
}

fn comments() -> TableDef {
    TableDef::new(
        COMMENTS,
        vec![
            ColumnDef::id(),
            ColumnDef::new("created", ColumnType::Timestamptz),
            ColumnDef::references("author_id", USERS, ReferenceAction::Cascade),
            ColumnDef::references("post_id", POSTS, ReferenceAction::Cascade),
            ColumnDef::new("text", ColumnType::Text),
        ],
        vec![IndexDef::on(&["created"]), IndexDef::on(&["post_id"])],
    )
}

fn follows() -> TableDef {
    TableDef::new(
        FOLLOWS,
        vec![
            ColumnDef::id(),
            ColumnDef::references("user_id", USERS, ReferenceAction::Cascade),
            ColumnDef::references("author_id", USERS, ReferenceAction::Cascade),
        ],
        vec![
            IndexDef::unique_on(&["user_id", "author_id"]),
            IndexDef::on(&["author_id"]),
        ],
    )
}

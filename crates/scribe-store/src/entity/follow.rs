use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `user_id` follows `author_id`. Both columns reference `users`, so the
/// edge is queried by column rather than through relations.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "follows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(indexed)]
    pub author_id: i32,
}

// Index definitions
// uq_follows__user_id_author_id on [user_id, author_id] unique=true
impl ActiveModelBehavior for ActiveModel {}

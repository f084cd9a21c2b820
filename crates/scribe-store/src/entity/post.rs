use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub text: String,
    #[sea_orm(indexed)]
    pub pub_date: DateTimeWithTimeZone,
    #[sea_orm(indexed)]
    pub author_id: i32,
    #[sea_orm(indexed)]
    pub group_id: Option<i32>,
    /// Path relative to the media root, e.g. `posts/cat_1a2b3c4d.png`.
    pub image: Option<String>,
    #[sea_orm(belongs_to, from = "author_id", to = "id")]
    pub author: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "group_id", to = "id")]
    pub group: HasOne<super::group::Entity>,
    #[sea_orm(has_many)]
    pub comments: HasMany<super::comment::Entity>,
}

// Index definitions
// ix_posts__pub_date on [pub_date]
// ix_posts__author_id on [author_id]
// ix_posts__group_id on [group_id]
impl ActiveModelBehavior for ActiveModel {}

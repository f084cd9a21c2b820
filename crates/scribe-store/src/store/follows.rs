use scribe_core::UserRef;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, SqlErr,
};

use super::Store;
use crate::entity::follow;
use crate::error::StoreError;

impl Store {
    /// Subscribe `actor` to `username`. Following yourself does nothing and
    /// an existing edge is left as is. Returns the target.
    pub async fn follow(&self, actor: &UserRef, username: &str) -> Result<UserRef, StoreError> {
        let target = self.require_user(username).await?.to_ref();
        if target.id == actor.id || self.is_following(actor, target.id).await? {
            return Ok(target);
        }

        let inserted = follow::ActiveModel {
            user_id: Set(actor.id),
            author_id: Set(target.id),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match inserted {
            Ok(_) => {
                tracing::info!(user = %actor.username, author = %target.username, "followed");
                Ok(target)
            }
            // lost a race with a concurrent follow
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(target)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Remove the edge. Unfollowing yourself does nothing; unfollowing
    /// someone you do not follow is NotFound.
    pub async fn unfollow(&self, actor: &UserRef, username: &str) -> Result<UserRef, StoreError> {
        let target = self.require_user(username).await?.to_ref();
        if target.id == actor.id {
            return Ok(target);
        }

        let result = follow::Entity::delete_many()
            .filter(follow::Column::UserId.eq(actor.id))
            .filter(follow::Column::AuthorId.eq(target.id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(StoreError::not_found(format_args!(
                "follow of `{}` by `{}`",
                target.username, actor.username
            )));
        }
        tracing::info!(user = %actor.username, author = %target.username, "unfollowed");
        Ok(target)
    }
}

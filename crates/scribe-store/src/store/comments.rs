use scribe_core::{CommentForm, PostLink, UserRef};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};

use super::{Store, now};
use crate::entity::comment;
use crate::error::StoreError;

impl Store {
    /// Attach a comment by `actor` to any existing post.
    pub async fn add_comment(
        &self,
        actor: &UserRef,
        post_id: i32,
        form: CommentForm,
    ) -> Result<PostLink, StoreError> {
        let post = self.require_post(post_id).await?;
        comment::ActiveModel {
            created: Set(now()),
            author_id: Set(actor.id),
            post_id: Set(post.id),
            text: Set(form.clean()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(PostLink {
            username: self.username_of(post.author_id).await?,
            post_id: post.id,
        })
    }
}

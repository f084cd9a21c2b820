use chrono::Utc;
use scribe_core::{
    CommentItem, GroupFeed, Page, PageRequest, PostDetail, PostItem, ProfileFeed, UserRef,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait};

use super::Store;
use crate::entity::{comment, follow, group, post};
use crate::error::StoreError;

impl Store {
    /// Every post, newest first.
    pub async fn list_recent_posts(
        &self,
        page: PageRequest,
    ) -> Result<Page<PostItem>, StoreError> {
        self.page_of(post::Entity::find(), page).await
    }

    pub async fn list_group_posts(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> Result<GroupFeed, StoreError> {
        let group = group::Entity::find()
            .filter(group::Column::Slug.eq(slug))
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::not_found(format_args!("group `{slug}`")))?;

        let page = self
            .page_of(
                post::Entity::find().filter(post::Column::GroupId.eq(group.id)),
                page,
            )
            .await?;
        Ok(GroupFeed {
            group: group.to_info(),
            page,
        })
    }

    pub async fn list_user_posts(
        &self,
        viewer: Option<&UserRef>,
        username: &str,
        page: PageRequest,
    ) -> Result<ProfileFeed, StoreError> {
        let author = self.require_user(username).await?;
        let page = self
            .page_of(
                post::Entity::find().filter(post::Column::AuthorId.eq(author.id)),
                page,
            )
            .await?;
        Ok(ProfileFeed {
            summary: self.author_summary(viewer, &author).await?,
            page,
        })
    }

    /// Posts by every author `viewer` follows at the time of the call.
    pub async fn list_followed_posts(
        &self,
        viewer: &UserRef,
        page: PageRequest,
    ) -> Result<Page<PostItem>, StoreError> {
        let followed = follow::Entity::find()
            .select_only()
            .column(follow::Column::AuthorId)
            .filter(follow::Column::UserId.eq(viewer.id))
            .into_query();
        self.page_of(
            post::Entity::find().filter(post::Column::AuthorId.in_subquery(followed)),
            page,
        )
        .await
    }

    /// A post with its comments, newest first. The post must belong to
    /// `username`.
    pub async fn get_post(
        &self,
        viewer: Option<&UserRef>,
        username: &str,
        post_id: i32,
    ) -> Result<PostDetail, StoreError> {
        let author = self.require_user(username).await?;
        let post = post::Entity::find_by_id(post_id)
            .filter(post::Column::AuthorId.eq(author.id))
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::not_found(format_args!("post {post_id} by `{username}`")))?;

        let comments = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post.id))
            .order_by_desc(comment::Column::Created)
            .order_by_desc(comment::Column::Id)
            .all(&self.db)
            .await?;
        let commenters = self
            .users_by_id(comments.iter().map(|c| c.author_id))
            .await?;
        let comments = comments
            .into_iter()
            .map(|c| {
                let author = commenters.get(&c.author_id).cloned().ok_or_else(|| {
                    StoreError::not_found(format_args!("user {}", c.author_id))
                })?;
                Ok(CommentItem {
                    id: c.id,
                    text: c.text,
                    created: c.created.with_timezone(&Utc),
                    author,
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        let group = match post.group_id {
            Some(id) => group::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(|g| g.to_ref()),
            None => None,
        };

        Ok(PostDetail {
            summary: self.author_summary(viewer, &author).await?,
            post: self.post_item(post, author.to_ref(), group),
            comments,
        })
    }
}

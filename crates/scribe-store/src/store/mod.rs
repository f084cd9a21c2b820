//! Query and mutation services over the scribe tables.

mod admin;
mod comments;
mod feed;
mod follows;
mod posts;

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, FixedOffset, Utc};
use scribe_config::ScribeConfig;
use scribe_core::{AuthorSummary, GroupRef, Page, PageRequest, PageWindow, PostItem, UserRef};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::entity::{follow, group, post, user};
use crate::error::StoreError;
use crate::media::MediaStorage;

/// Entry point for every read and write the application performs.
#[derive(Debug, Clone)]
pub struct Store {
    db: DatabaseConnection,
    media: MediaStorage,
    config: ScribeConfig,
}

impl Store {
    pub fn new(db: DatabaseConnection, config: &ScribeConfig) -> Self {
        Self {
            db,
            media: MediaStorage::new(config.media_dir()),
            config: config.clone(),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn media(&self) -> &MediaStorage {
        &self.media
    }

    pub fn page_size(&self) -> u64 {
        self.config.page_size()
    }

    /// Resolve the authenticated username forwarded by the front proxy.
    pub async fn find_user(&self, username: &str) -> Result<Option<UserRef>, StoreError> {
        Ok(self.user_named(username).await?.map(|u| u.to_ref()))
    }

    async fn user_named(&self, username: &str) -> Result<Option<user::Model>, StoreError> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    async fn require_user(&self, username: &str) -> Result<user::Model, StoreError> {
        self.user_named(username)
            .await?
            .ok_or_else(|| StoreError::not_found(format_args!("user `{username}`")))
    }

    async fn require_post(&self, post_id: i32) -> Result<post::Model, StoreError> {
        post::Entity::find_by_id(post_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::not_found(format_args!("post {post_id}")))
    }

    async fn username_of(&self, user_id: i32) -> Result<String, StoreError> {
        user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .map(|u| u.username)
            .ok_or_else(|| StoreError::not_found(format_args!("user {user_id}")))
    }

    async fn is_following(&self, viewer: &UserRef, author_id: i32) -> Result<bool, StoreError> {
        let edges = follow::Entity::find()
            .filter(follow::Column::UserId.eq(viewer.id))
            .filter(follow::Column::AuthorId.eq(author_id))
            .count(&self.db)
            .await?;
        Ok(edges > 0)
    }

    async fn author_summary(
        &self,
        viewer: Option<&UserRef>,
        author: &user::Model,
    ) -> Result<AuthorSummary, StoreError> {
        let post_count = post::Entity::find()
            .filter(post::Column::AuthorId.eq(author.id))
            .count(&self.db)
            .await?;
        let following = match viewer {
            Some(viewer) => self.is_following(viewer, author.id).await?,
            None => false,
        };
        Ok(AuthorSummary {
            author: author.to_ref(),
            post_count,
            following,
        })
    }

    /// Newest first, one page of `query`.
    async fn page_of(
        &self,
        query: Select<post::Entity>,
        request: PageRequest,
    ) -> Result<Page<PostItem>, StoreError> {
        let paginator = query
            .order_by_desc(post::Column::PubDate)
            .order_by_desc(post::Column::Id)
            .paginate(&self.db, self.page_size());
        let window = PageWindow::resolve(request, paginator.num_items().await?, self.page_size())?;
        let posts = paginator.fetch_page(window.index()).await?;
        Ok(Page::new(window, self.post_items(posts).await?))
    }

    /// Attach authors and groups, loading each set with one query.
    async fn post_items(&self, posts: Vec<post::Model>) -> Result<Vec<PostItem>, StoreError> {
        let authors = self.users_by_id(posts.iter().map(|p| p.author_id)).await?;
        let groups = self.groups_by_id(posts.iter().filter_map(|p| p.group_id)).await?;

        posts
            .into_iter()
            .map(|post| {
                let author = authors.get(&post.author_id).cloned().ok_or_else(|| {
                    StoreError::not_found(format_args!("user {}", post.author_id))
                })?;
                let group = post.group_id.and_then(|id| groups.get(&id).cloned());
                Ok(self.post_item(post, author, group))
            })
            .collect()
    }

    fn post_item(&self, post: post::Model, author: UserRef, group: Option<GroupRef>) -> PostItem {
        PostItem {
            id: post.id,
            text: post.text,
            pub_date: post.pub_date.with_timezone(&Utc),
            author,
            group,
            image: post.image.map(|path| self.config.media_url_for(&path)),
        }
    }

    async fn users_by_id(
        &self,
        ids: impl Iterator<Item = i32>,
    ) -> Result<HashMap<i32, UserRef>, StoreError> {
        let ids: BTreeSet<i32> = ids.collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        Ok(user::Entity::find()
            .filter(user::Column::Id.is_in(ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u.to_ref()))
            .collect())
    }

    async fn groups_by_id(
        &self,
        ids: impl Iterator<Item = i32>,
    ) -> Result<HashMap<i32, GroupRef>, StoreError> {
        let ids: BTreeSet<i32> = ids.collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        Ok(group::Entity::find()
            .filter(group::Column::Id.is_in(ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g.to_ref()))
            .collect())
    }
}

fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}

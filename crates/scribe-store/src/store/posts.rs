use scribe_core::{CleanedPost, GroupRef, ImageChange, PostForm, PostFormContext, PostLink, UserRef};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder};

use super::{Store, now};
use crate::entity::{group, post};
use crate::error::StoreError;

impl Store {
    /// Groups offered by the post form, by title.
    pub async fn post_form_context(&self) -> Result<PostFormContext, StoreError> {
        Ok(PostFormContext {
            groups: self.group_choices().await?,
            is_edit: false,
            post: None,
        })
    }

    /// Form context for editing a post the actor wrote.
    pub async fn edit_form_context(
        &self,
        actor: &UserRef,
        post_id: i32,
    ) -> Result<PostFormContext, StoreError> {
        let post = self.authored_post(actor, post_id).await?;
        let group = match post.group_id {
            Some(id) => group::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(|g| g.to_ref()),
            None => None,
        };
        Ok(PostFormContext {
            groups: self.group_choices().await?,
            is_edit: true,
            post: Some(self.post_item(post, actor.clone(), group)),
        })
    }

    pub async fn create_post(
        &self,
        author: &UserRef,
        form: PostForm,
    ) -> Result<PostLink, StoreError> {
        let cleaned = self.clean_post_form(form).await?;
        let image = match &cleaned.image {
            ImageChange::Replace(image) => Some(self.media.save(image).await?),
            ImageChange::Keep | ImageChange::Clear => None,
        };

        let inserted = post::ActiveModel {
            text: Set(cleaned.text),
            pub_date: Set(now()),
            author_id: Set(author.id),
            group_id: Set(cleaned.group_id),
            image: Set(image.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(post) => {
                tracing::info!(post_id = post.id, author = %author.username, "post created");
                Ok(PostLink {
                    username: author.username.clone(),
                    post_id: post.id,
                })
            }
            Err(err) => {
                if let Some(path) = image {
                    self.media.remove(&path).await?;
                }
                Err(err.into())
            }
        }
    }

    /// Apply an edit by the post's author. A replaced or cleared image
    /// file is removed once the row is updated.
    pub async fn update_post(
        &self,
        actor: &UserRef,
        post_id: i32,
        form: PostForm,
    ) -> Result<PostLink, StoreError> {
        let existing = self.authored_post(actor, post_id).await?;
        let cleaned = self.clean_post_form(form).await?;
        let old_image = existing.image.clone();

        let mut active: post::ActiveModel = existing.into();
        active.text = Set(cleaned.text);
        active.group_id = Set(cleaned.group_id);
        let (replaced, saved) = match &cleaned.image {
            ImageChange::Keep => (false, None),
            ImageChange::Clear => {
                active.image = Set(None);
                (true, None)
            }
            ImageChange::Replace(image) => {
                let path = self.media.save(image).await?;
                active.image = Set(Some(path.clone()));
                (true, Some(path))
            }
        };

        if let Err(err) = active.update(&self.db).await {
            if let Some(path) = saved {
                self.media.remove(&path).await?;
            }
            return Err(err.into());
        }

        if let (true, Some(path)) = (replaced, old_image) {
            self.media.remove(&path).await?;
        }
        tracing::info!(post_id, author = %actor.username, "post updated");
        Ok(PostLink {
            username: actor.username.clone(),
            post_id,
        })
    }

    /// NotFound unless a post with this id exists, whoever wrote it.
    pub async fn ensure_post(&self, post_id: i32) -> Result<(), StoreError> {
        self.require_post(post_id).await.map(drop)
    }

    /// Delete the row, then the stored image. Comments go with the row.
    pub async fn delete_post(&self, actor: &UserRef, post_id: i32) -> Result<(), StoreError> {
        let post = self.authored_post(actor, post_id).await?;
        post::Entity::delete_by_id(post.id).exec(&self.db).await?;
        if let Some(path) = &post.image {
            self.media.remove(path).await?;
        }
        tracing::info!(post_id, author = %actor.username, "post deleted");
        Ok(())
    }

    /// Load a post, refusing anyone but its author.
    async fn authored_post(
        &self,
        actor: &UserRef,
        post_id: i32,
    ) -> Result<post::Model, StoreError> {
        let post = self.require_post(post_id).await?;
        if post.author_id != actor.id {
            tracing::warn!(post_id, actor = %actor.username, "change refused for non-author");
            return Err(StoreError::NotAuthor {
                post_id,
                author: self.username_of(post.author_id).await?,
            });
        }
        Ok(post)
    }

    async fn clean_post_form(&self, form: PostForm) -> Result<CleanedPost, StoreError> {
        let group_exists = match form.group_id() {
            Ok(Some(id)) => group::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .is_some(),
            Ok(None) | Err(_) => true,
        };
        Ok(form.clean(group_exists)?)
    }

    async fn group_choices(&self) -> Result<Vec<GroupRef>, StoreError> {
        Ok(group::Entity::find()
            .order_by_asc(group::Column::Title)
            .all(&self.db)
            .await?
            .iter()
            .map(group::Model::to_ref)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use scribe_core::{CommentForm, PageRequest, PostForm, Upload};

    use crate::error::StoreError;
    use crate::testing::{fixture, png_upload, text_form};

    #[tokio::test]
    async fn test_created_post_is_visible_everywhere() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let link = f.store.create_post(&alice, text_form("  hello  ")).await.unwrap();
        assert_eq!(link.path(), format!("/alice/{}/", link.post_id));

        let home = f.store.list_recent_posts(PageRequest::First).await.unwrap();
        assert_eq!(home.items[0].text, "hello");
        let profile = f
            .store
            .list_user_posts(None, "alice", PageRequest::First)
            .await
            .unwrap();
        assert_eq!(profile.page.items[0].text, "hello");
        let detail = f.store.get_post(None, "alice", link.post_id).await.unwrap();
        assert_eq!(detail.post.text, "hello");
    }

    #[tokio::test]
    async fn test_invalid_form_persists_nothing() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let form = PostForm {
            group: Some("12345".into()),
            ..text_form("")
        };

        let Err(StoreError::Validation(errors)) = f.store.create_post(&alice, form).await else {
            panic!("expected validation error");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["group", "text"]);
        let home = f.store.list_recent_posts(PageRequest::First).await.unwrap();
        assert_eq!(home.count, 0);
    }

    #[tokio::test]
    async fn test_image_is_stored_and_exposed_as_url() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let form = PostForm {
            image: Some(png_upload("kitten.png")),
            ..text_form("with picture")
        };
        let link = f.store.create_post(&alice, form).await.unwrap();

        let detail = f.store.get_post(None, "alice", link.post_id).await.unwrap();
        let url = detail.post.image.unwrap();
        assert!(url.starts_with("/media/posts/kitten_"), "{url}");
        let stored = url.trim_start_matches("/media/");
        assert!(f.store.media().exists(stored).await);
    }

    #[tokio::test]
    async fn test_non_image_upload_does_not_update() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let link = f.post(&alice, "original").await;

        let form = PostForm {
            image: Some(Upload::new("fake.png", b"not really a png".to_vec())),
            ..text_form("changed")
        };
        let Err(StoreError::Validation(errors)) =
            f.store.update_post(&alice, link.post_id, form).await
        else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.field("image"),
            ["Upload a valid image. The file you uploaded was either not an image or a corrupted image."]
        );
        let detail = f.store.get_post(None, "alice", link.post_id).await.unwrap();
        assert_eq!(detail.post.text, "original");
    }

    #[tokio::test]
    async fn test_edit_by_author() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let cats = f.group("cats").await;
        let link = f.post(&alice, "before").await;

        let updated = f
            .store
            .update_post(&alice, link.post_id, text_form("after").with_group(cats.id))
            .await
            .unwrap();
        assert_eq!(updated, link);

        let detail = f.store.get_post(None, "alice", link.post_id).await.unwrap();
        assert_eq!(detail.post.text, "after");
        assert_eq!(detail.post.group.unwrap().slug, "cats");
    }

    #[tokio::test]
    async fn test_non_author_cannot_edit_or_delete() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let bob = f.user("bob").await;
        let link = f.post(&alice, "mine").await;

        let edit = f.store.update_post(&bob, link.post_id, text_form("hijack")).await;
        assert!(matches!(
            edit,
            Err(StoreError::NotAuthor { ref author, .. }) if author == "alice"
        ));
        assert!(matches!(
            f.store.delete_post(&bob, link.post_id).await,
            Err(StoreError::NotAuthor { .. })
        ));
        assert!(matches!(
            f.store.edit_form_context(&bob, link.post_id).await,
            Err(StoreError::NotAuthor { .. })
        ));

        let detail = f.store.get_post(None, "alice", link.post_id).await.unwrap();
        assert_eq!(detail.post.text, "mine");
    }

    #[tokio::test]
    async fn test_replacing_and_clearing_image_removes_old_file() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let form = PostForm {
            image: Some(png_upload("one.png")),
            ..text_form("pic")
        };
        let link = f.store.create_post(&alice, form).await.unwrap();
        let first = f.stored_image(link.post_id).await.unwrap();

        let form = PostForm {
            image: Some(png_upload("two.png")),
            ..text_form("pic")
        };
        f.store.update_post(&alice, link.post_id, form).await.unwrap();
        let second = f.stored_image(link.post_id).await.unwrap();
        assert_ne!(first, second);
        assert!(!f.store.media().exists(&first).await);
        assert!(f.store.media().exists(&second).await);

        let form = PostForm {
            clear_image: true,
            ..text_form("pic")
        };
        f.store.update_post(&alice, link.post_id, form).await.unwrap();
        assert_eq!(f.stored_image(link.post_id).await, None);
        assert!(!f.store.media().exists(&second).await);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_files_consistent() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let form = PostForm {
            image: Some(png_upload("one.png")),
            ..text_form("pic")
        };
        let link = f.store.create_post(&alice, form).await.unwrap();
        let first = f.stored_image(link.post_id).await.unwrap();
        f.reject("UPDATE", "posts").await;

        let form = PostForm {
            image: Some(png_upload("two.png")),
            ..text_form("changed")
        };
        let result = f.store.update_post(&alice, link.post_id, form).await;

        assert!(matches!(result, Err(StoreError::Database(_))));
        assert_eq!(f.stored_image(link.post_id).await, Some(first.clone()));
        assert!(f.store.media().exists(&first).await);
        assert_eq!(f.stored_file_count(), 1);
    }

    #[tokio::test]
    async fn test_ensure_post() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let link = f.post(&alice, "here").await;

        assert!(f.store.ensure_post(link.post_id).await.is_ok());
        assert!(matches!(
            f.store.ensure_post(link.post_id + 1).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_comments_and_image() {
        let f = fixture().await;
        let alice = f.user("alice").await;
        let form = PostForm {
            image: Some(png_upload("gone.png")),
            ..text_form("bye")
        };
        let link = f.store.create_post(&alice, form).await.unwrap();
        let path = f.stored_image(link.post_id).await.unwrap();
        f.store
            .add_comment(&alice, link.post_id, CommentForm { text: "c".into() })
            .await
            .unwrap();

        f.store.delete_post(&alice, link.post_id).await.unwrap();

        assert!(!f.store.media().exists(&path).await);
        assert_eq!(f.comment_count().await, 0);
        assert!(matches!(
            f.store.get_post(None, "alice", link.post_id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_form_context_lists_groups_by_title() {
        let f = fixture().await;
        f.store.create_group("Zebras", "zebras", "").await.unwrap();
        f.store.create_group("Ants", "ants", "").await.unwrap();

        let ctx = f.store.post_form_context().await.unwrap();
        let titles: Vec<_> = ctx.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["Ants", "Zebras"]);
        assert!(!ctx.is_edit);
    }
}

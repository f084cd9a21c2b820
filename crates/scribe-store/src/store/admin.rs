//! User and group management for the command line.

use scribe_core::{FormErrors, GroupInfo, UserRef};
use scribe_naming::{NameError, validate_slug, validate_username};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use super::{Store, now};
use crate::entity::{group, post, user};
use crate::error::StoreError;

const TITLE_MAX_LEN: usize = 200;
const EMAIL_MAX_LEN: usize = 254;

impl Store {
    pub async fn create_user(&self, username: &str, email: &str) -> Result<UserRef, StoreError> {
        let mut errors = FormErrors::new();
        if let Err(err) = validate_username(username) {
            errors.add("username", err.to_string());
        }
        // email is optional
        if let (false, Err(err)) = (email.is_empty(), check_length(email, EMAIL_MAX_LEN)) {
            errors.add("email", err.to_string());
        }
        errors.into_result(())?;

        if self.user_named(username).await?.is_some() {
            return Err(StoreError::Conflict(format!("user `{username}`")));
        }

        let user = user::ActiveModel {
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            date_joined: Set(now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::info!(user_id = user.id, %username, "user created");
        Ok(user.to_ref())
    }

    /// Remove a user with everything they wrote. Post images are removed
    /// after the row, so a failed delete leaves every file in place.
    pub async fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        let user = self.require_user(username).await?;

        let images: Vec<String> = post::Entity::find()
            .filter(post::Column::AuthorId.eq(user.id))
            .filter(post::Column::Image.is_not_null())
            .all(&self.db)
            .await?
            .into_iter()
            .filter_map(|p| p.image)
            .collect();

        user::Entity::delete_by_id(user.id).exec(&self.db).await?;
        for path in &images {
            self.media.remove(path).await?;
        }
        tracing::info!(user_id = user.id, %username, images = images.len(), "user deleted");
        Ok(())
    }

    pub async fn create_group(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<GroupInfo, StoreError> {
        let mut errors = FormErrors::new();
        if let Err(err) = check_length(title.trim(), TITLE_MAX_LEN) {
            let message = match err {
                NameError::Blank => scribe_core::error::REQUIRED.to_string(),
                other => other.to_string(),
            };
            errors.add("title", message);
        }
        if let Err(err) = validate_slug(slug) {
            errors.add("slug", err.to_string());
        }
        errors.into_result(())?;

        let taken = group::Entity::find()
            .filter(group::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;
        if taken.is_some() {
            return Err(StoreError::Conflict(format!("group `{slug}`")));
        }

        let group = group::ActiveModel {
            title: Set(title.trim().to_string()),
            slug: Set(slug.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::info!(group_id = group.id, %slug, "group created");
        Ok(group.to_info())
    }

    /// Posts in the group stay, without a group.
    pub async fn delete_group(&self, slug: &str) -> Result<(), StoreError> {
        let result = group::Entity::delete_many()
            .filter(group::Column::Slug.eq(slug))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(StoreError::not_found(format_args!("group `{slug}`")));
        }
        tracing::info!(%slug, "group deleted");
        Ok(())
    }
}

fn check_length(value: &str, max: usize) -> Result<(), NameError> {
    let actual = value.chars().count();
    match actual {
        0 => Err(NameError::Blank),
        n if n > max => Err(NameError::TooLong { max, actual }),
        _ => Ok(()),
    }
}

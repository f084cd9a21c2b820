use std::io::Cursor;

use scribe_config::ScribeConfig;
use scribe_core::{GroupInfo, PostForm, PostLink, Upload, UserRef};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use tempfile::TempDir;

use crate::entity::{comment, post};
use crate::migrate::{connect, migrate};
use crate::store::Store;

/// A migrated SQLite database and media root in a temporary directory.
pub(crate) struct Fixture {
    pub store: Store,
    dir: TempDir,
}

pub(crate) async fn fixture() -> Fixture {
    fixture_with_page_size(10).await
}

pub(crate) async fn fixture_with_page_size(page_size: u64) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let config = ScribeConfig {
        database_url: format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display()),
        media_dir: dir.path().join("media"),
        page_size,
        ..Default::default()
    };
    let db = connect(&config).await.unwrap();
    migrate(&db).await.unwrap();
    Fixture {
        store: Store::new(db, &config),
        dir,
    }
}

impl Fixture {
    pub async fn user(&self, username: &str) -> UserRef {
        self.store
            .create_user(username, &format!("{username}@example.com"))
            .await
            .unwrap()
    }

    pub async fn group(&self, slug: &str) -> GroupInfo {
        self.store
            .create_group(&slug.to_uppercase(), slug, "")
            .await
            .unwrap()
    }

    pub async fn post(&self, author: &UserRef, text: &str) -> PostLink {
        self.store.create_post(author, text_form(text)).await.unwrap()
    }

    /// Stored image path of a post, as kept in the row.
    pub async fn stored_image(&self, post_id: i32) -> Option<String> {
        post::Entity::find_by_id(post_id)
            .one(self.store.db())
            .await
            .unwrap()
            .and_then(|p| p.image)
    }

    pub async fn comment_count(&self) -> u64 {
        comment::Entity::find().count(self.store.db()).await.unwrap()
    }

    /// Number of files under `media/posts`.
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.dir.path().join("media").join("posts"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// Make every `event` (`UPDATE`, `DELETE`, ...) on `table` fail.
    pub async fn reject(&self, event: &str, table: &str) {
        let sql = format!(
            "CREATE TRIGGER reject_{event}_{table} BEFORE {event} ON {table} \
             BEGIN SELECT RAISE(ABORT, 'rejected'); END"
        );
        self.store.db().execute_unprepared(&sql).await.unwrap();
    }
}

pub(crate) fn text_form(text: &str) -> PostForm {
    PostForm::new(text)
}

pub(crate) fn png_upload(filename: &str) -> Upload {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(2, 2));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    Upload::new(filename, out.into_inner())
}

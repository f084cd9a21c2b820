//! Page contexts returned by the store and rendered by the web layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::page::Page;

/// A user as shown next to content, and as the acting viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRef {
    pub id: i32,
    pub username: String,
}

/// Canonical location of a post page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLink {
    pub username: String,
    pub post_id: i32,
}

impl PostLink {
    pub fn path(&self) -> String {
        format!("/{}/{}/", self.username, self.post_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRef {
    pub id: i32,
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupInfo {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostItem {
    pub id: i32,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author: UserRef,
    pub group: Option<GroupRef>,
    /// Public URL of the image.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentItem {
    pub id: i32,
    pub text: String,
    pub created: DateTime<Utc>,
    pub author: UserRef,
}

/// Header shown on profile and post pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub author: UserRef,
    pub post_count: u64,
    /// Whether the viewer follows this author. Always false for anonymous
    /// viewers.
    pub following: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupFeed {
    pub group: GroupInfo,
    pub page: Page<PostItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileFeed {
    #[serde(flatten)]
    pub summary: AuthorSummary,
    pub page: Page<PostItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: AuthorSummary,
    pub post: PostItem,
    pub comments: Vec<CommentItem>,
}

/// Context for the create and edit forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostFormContext {
    pub groups: Vec<GroupRef>,
    pub is_edit: bool,
    /// The post being edited.
    pub post: Option<PostItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageRequest, PageWindow};

    fn alice() -> UserRef {
        UserRef {
            id: 1,
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_profile_summary_is_flattened() {
        let feed = ProfileFeed {
            summary: AuthorSummary {
                author: alice(),
                post_count: 0,
                following: false,
            },
            page: Page::new(PageWindow::resolve(PageRequest::First, 0, 10).unwrap(), vec![]),
        };
        let json = serde_json::to_value(&feed).unwrap();
        assert_eq!(json["author"]["username"], "alice");
        assert_eq!(json["post_count"], 0);
        assert_eq!(json["following"], false);
        assert_eq!(json["page"]["num_pages"], 1);
    }

    #[test]
    fn test_post_link_path() {
        let link = PostLink {
            username: "alice".to_string(),
            post_id: 42,
        };
        assert_eq!(link.path(), "/alice/42/");
    }

    #[test]
    fn test_post_without_group_or_image_serializes_nulls() {
        let post = PostItem {
            id: 3,
            text: "hi".to_string(),
            pub_date: Utc::now(),
            author: alice(),
            group: None,
            image: None,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert!(json["group"].is_null());
        assert!(json["image"].is_null());
    }
}

pub mod error;
pub mod forms;
pub mod page;
pub mod upload;
pub mod view;

pub use error::FormErrors;
pub use forms::{CleanedPost, CommentForm, ImageChange, InvalidChoice, PostForm};
pub use page::{Page, PageError, PageRequest, PageWindow};
pub use upload::{ImageError, Upload, VerifiedImage, verify_image};
pub use view::{
    AuthorSummary, CommentItem, GroupFeed, GroupInfo, GroupRef, PostDetail, PostFormContext,
    PostItem, PostLink, ProfileFeed, UserRef,
};

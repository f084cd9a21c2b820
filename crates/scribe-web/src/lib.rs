//! HTTP surface of scribe.
//!
//! Every page is a JSON document carrying what a template would render.
//! Writes answer with `302 Found` to the page that shows the result.

pub mod auth;
pub mod cache;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod pages;
pub mod redirect;
pub mod routes;
pub mod server;
pub mod state;

pub use error::AppError;
pub use routes::router;
pub use server::{init_tracing, serve};
pub use state::AppState;

pub mod backend;
pub mod config;
pub mod log_format;

pub use backend::DatabaseBackend;
pub use config::{ScribeConfig, default_database_url};
pub use log_format::LogFormat;

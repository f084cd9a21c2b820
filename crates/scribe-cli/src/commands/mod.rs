pub mod group;
pub mod init;
pub mod migrate;
pub mod schema;
pub mod serve;
pub mod sql;
pub mod user;

pub use group::{cmd_group_add, cmd_group_remove};
pub use init::cmd_init;
pub use migrate::cmd_migrate;
pub use schema::cmd_schema;
pub use serve::cmd_serve;
pub use sql::cmd_sql;
pub use user::{cmd_user_add, cmd_user_remove};

//! Persistence for scribe: SeaORM entities, schema migration, media files,
//! and the [`Store`] service the web layer and CLI call into.

pub mod entity;
pub mod error;
pub mod media;
pub mod migrate;
pub mod store;

#[cfg(test)]
mod testing;

pub use error::StoreError;
pub use media::MediaStorage;
pub use migrate::{backend_of, connect, migrate};
pub use store::Store;

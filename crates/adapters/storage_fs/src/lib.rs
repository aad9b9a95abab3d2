//! # blinkhub-adapter-storage-fs
//!
//! Read-only asset storage backed by a directory on the local filesystem
//! (on the device, the mount point of the flashed asset partition).
//!
//! ## Responsibilities
//! - Implement the `AssetSource` port defined in `blinkhub-app::ports`
//! - Resolve asset names under a fixed root, never outside it
//! - Map filesystem failures onto `AssetError::NotFound` / `AssetError::Io`
//!
//! ## Dependency rule
//! Depends on `blinkhub-app` (for port traits) and `blinkhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
mod source;

pub use error::StorageError;
pub use source::{Config, FsAssetSource};

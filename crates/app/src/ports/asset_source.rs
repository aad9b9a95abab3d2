//! Storage port — read-only access to named assets.

use std::future::Future;
use std::sync::Arc;

use blinkhub_domain::asset::AssetName;
use blinkhub_domain::error::AssetError;

/// Reads complete assets from a read-only store.
pub trait AssetSource {
    /// Read the whole asset named `name`.
    ///
    /// Implementations return [`AssetError::NotFound`] when the name does not
    /// resolve to an asset and [`AssetError::Io`] for any other read failure.
    /// Partial contents are never returned.
    fn read(&self, name: &AssetName) -> impl Future<Output = Result<Vec<u8>, AssetError>> + Send;
}

impl<T: AssetSource + Send + Sync> AssetSource for Arc<T> {
    fn read(&self, name: &AssetName) -> impl Future<Output = Result<Vec<u8>, AssetError>> + Send {
        (**self).read(name)
    }
}

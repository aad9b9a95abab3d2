//! Asset store — loads complete assets for a single request.

use blinkhub_domain::asset::{Asset, AssetName};
use blinkhub_domain::error::AssetError;

use crate::ports::AssetSource;

/// Application service wrapping an [`AssetSource`].
///
/// Every call reads the asset fresh; nothing is cached between requests.
pub struct AssetStore<S> {
    source: S,
}

impl<S: AssetSource> AssetStore<S> {
    /// Create a new store backed by the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the asset named `name`.
    ///
    /// The returned [`Asset`] exclusively owns its bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] when the asset does not exist, or
    /// [`AssetError::Io`] when the underlying read fails.
    #[tracing::instrument(skip(self), fields(asset = %name))]
    pub async fn load(&self, name: &AssetName) -> Result<Asset, AssetError> {
        match self.source.read(name).await {
            Ok(bytes) => {
                tracing::debug!(len = bytes.len(), "asset loaded");
                Ok(Asset::new(name.clone(), bytes))
            }
            Err(err @ AssetError::NotFound { .. }) => {
                tracing::warn!("asset not found");
                Err(err)
            }
            Err(err) => {
                tracing::error!(error = %err, "asset read failed");
                Err(err)
            }
        }
    }
}

//! Directory-backed [`AssetSource`].

use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use blinkhub_app::ports::AssetSource;
use blinkhub_domain::asset::AssetName;
use blinkhub_domain::error::AssetError;

use crate::error::StorageError;

/// Configuration for the filesystem storage adapter.
pub struct Config {
    /// Directory that asset names are resolved against.
    pub root: PathBuf,
}

impl Config {
    /// Build a [`FsAssetSource`] from this configuration.
    ///
    /// The root must already exist and be a directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the root cannot be inspected or is not a
    /// directory.
    pub async fn build(self) -> Result<FsAssetSource, StorageError> {
        let metadata = tokio::fs::metadata(&self.root)
            .await
            .map_err(|source| StorageError::Io {
                path: self.root.clone(),
                source,
            })?;
        if !metadata.is_dir() {
            return Err(StorageError::NotADirectory { path: self.root });
        }
        tracing::info!(root = %self.root.display(), "asset storage ready");
        Ok(FsAssetSource { root: self.root })
    }
}

/// Serves assets from files under a root directory.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    fn resolve(&self, name: &AssetName) -> PathBuf {
        name.components()
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl AssetSource for FsAssetSource {
    fn read(&self, name: &AssetName) -> impl Future<Output = Result<Vec<u8>, AssetError>> + Send {
        let path = self.resolve(name);
        let name = name.clone();
        async move {
            let io_error = |source: std::io::Error| {
                if source.kind() == ErrorKind::NotFound {
                    AssetError::NotFound { name: name.clone() }
                } else {
                    AssetError::Io {
                        name: name.clone(),
                        source,
                    }
                }
            };
            let metadata = tokio::fs::metadata(&path).await.map_err(io_error)?;
            if !metadata.is_file() {
                return Err(AssetError::NotFound { name: name.clone() });
            }
            tokio::fs::read(&path).await.map_err(io_error)
        }
    }
}

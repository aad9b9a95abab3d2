//! Assets — static, read-only resources identified by a path-like name.

use std::fmt;

use crate::error::InvalidAssetName;

/// Validated, storage-relative asset name (e.g. `index.html`, `css/site.css`).
///
/// A leading `/` is stripped so `/index.html` and `index.html` refer to the
/// same asset. Names never contain `..` components, so a storage adapter can
/// join them onto a root without escaping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetName(String);

impl AssetName {
    /// Validate and normalise an asset name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAssetName`] when the name is empty after trimming
    /// leading slashes, contains a `..` component, or contains a NUL byte.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidAssetName> {
        let raw = name.into();
        if raw.contains('\0') {
            return Err(InvalidAssetName::Nul(raw));
        }
        let trimmed = raw.trim_start_matches('/');
        if trimmed.is_empty() {
            return Err(InvalidAssetName::Empty);
        }
        if trimmed.split(['/', '\\']).any(|part| part == "..") {
            return Err(InvalidAssetName::ParentComponent(raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The normalised name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the `/`-separated, non-empty components of the name.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|part| !part.is_empty() && *part != ".")
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Asset contents loaded for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    name: AssetName,
    bytes: Vec<u8>,
}

impl Asset {
    #[must_use]
    pub fn new(name: AssetName, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }

    #[must_use]
    pub fn name(&self) -> &AssetName {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Exact length of the contents in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take ownership of the contents.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_leading_slash() {
        let name = AssetName::new("/index.html").unwrap();
        assert_eq!(name.as_str(), "index.html");
        assert_eq!(name, AssetName::new("index.html").unwrap());
    }

    #[test]
    fn should_reject_empty_name() {
        assert_eq!(AssetName::new(""), Err(InvalidAssetName::Empty));
        assert_eq!(AssetName::new("///"), Err(InvalidAssetName::Empty));
    }

    #[test]
    fn should_reject_parent_components() {
        assert!(matches!(
            AssetName::new("../secret"),
            Err(InvalidAssetName::ParentComponent(_))
        ));
        assert!(matches!(
            AssetName::new("css/../../etc/passwd"),
            Err(InvalidAssetName::ParentComponent(_))
        ));
        assert!(matches!(
            AssetName::new("css\\..\\x"),
            Err(InvalidAssetName::ParentComponent(_))
        ));
    }

    #[test]
    fn should_reject_nul_byte() {
        assert!(matches!(
            AssetName::new("index\0.html"),
            Err(InvalidAssetName::Nul(_))
        ));
    }

    #[test]
    fn should_accept_dotted_file_names() {
        let name = AssetName::new("app..min.js").unwrap();
        assert_eq!(name.as_str(), "app..min.js");
    }

    #[test]
    fn should_split_components_skipping_current_dir() {
        let name = AssetName::new("css/./site.css").unwrap();
        let parts: Vec<&str> = name.components().collect();
        assert_eq!(parts, vec!["css", "site.css"]);
    }

    #[test]
    fn should_report_exact_length() {
        let asset = Asset::new(AssetName::new("a.txt").unwrap(), b"hello".to_vec());
        assert_eq!(asset.len(), 5);
        assert!(!asset.is_empty());
        assert_eq!(asset.into_bytes(), b"hello");
    }
}

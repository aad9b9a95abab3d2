//! Error types used across the workspace.
//!
//! Each component defines its own typed error; [`HubError`] composes them via
//! `#[from]` so handlers can use `?` and the transport adapter can translate
//! a single type into a response.

use crate::asset::AssetName;
use crate::register::{OutputId, RegisterName};
use crate::route::Method;

/// Top-level error returned by request handling.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("asset error")]
    Asset(#[from] AssetError),

    #[error("render error")]
    Render(#[from] RenderError),

    #[error("route error")]
    Route(#[from] RouteError),

    #[error("device state error")]
    State(#[from] StateError),
}

/// Failure while loading an asset from storage.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The name does not resolve to an existing asset.
    #[error("asset {name} not found")]
    NotFound { name: AssetName },

    /// The underlying read failed.
    #[error("failed to read asset {name}")]
    Io {
        name: AssetName,
        #[source]
        source: std::io::Error,
    },
}

/// An asset name rejected by [`AssetName::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAssetName {
    #[error("asset name must not be empty")]
    Empty,
    #[error("asset name {0:?} must not contain parent directory components")]
    ParentComponent(String),
    #[error("asset name {0:?} must not contain NUL bytes")]
    Nul(String),
}

/// Failure while substituting template tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The output buffer could not be allocated.
    #[error("failed to allocate {requested} bytes for rendered output")]
    AllocationFailure { requested: usize },
}

/// Routing failures, both at startup and per request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No handler is registered for the request.
    #[error("no route for {method} {path}")]
    NotFound { method: String, path: String },

    /// A second handler was registered for the same route.
    #[error("route {method} {path} registered twice")]
    Duplicate { method: Method, path: String },

    /// A handler could not be built from the provided components.
    #[error("invalid route configuration: {0}")]
    Configuration(String),
}

/// Failure while reading or mutating device registers.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("unknown register {0}")]
    UnknownRegister(RegisterName),

    #[error("register {0} declared twice")]
    DuplicateRegister(RegisterName),

    #[error("failed to drive output")]
    Output(#[from] OutputError),
}

/// Failure reported by the output-control capability.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("output {0} is not available")]
    Unavailable(OutputId),

    #[error("failed to drive output {id}")]
    Io {
        id: OutputId,
        #[source]
        source: std::io::Error,
    },
}

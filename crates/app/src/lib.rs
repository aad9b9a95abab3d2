//! # blinkhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AssetSource` — byte-oriented, read-only named-resource reads
//!   - `OutputControl` — drive a physical output line high or low
//! - Provide the **services** composed by request handlers:
//!   - `AssetStore` — load a complete asset per request
//!   - `DeviceState` — serialized register reads and writes
//!   - `RouteDispatcher` — exact-match `(method, path)` lookup and invoke
//! - Provide the concrete **handlers** for the status page and LED endpoints
//!
//! ## Dependency rule
//! Depends on `blinkhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod handlers;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

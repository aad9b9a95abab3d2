//! Registers — named, independently settable device values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Name of a register (e.g. `led`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisterName(String);

impl RegisterName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegisterName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a physical output line (a GPIO number on the device).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputId(u32);

impl OutputId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Point-in-time view of a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterSnapshot {
    pub value: bool,
    /// When the value last changed. Repeated sets of the same value keep the
    /// original timestamp.
    pub last_changed: Timestamp,
}

/// Uppercase `ON` / `OFF` label used in rendered pages.
#[must_use]
pub fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

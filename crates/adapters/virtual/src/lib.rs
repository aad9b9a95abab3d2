//! # blinkhub-adapter-virtual
//!
//! Simulated output lines implementing the `OutputControl` port.
//!
//! Each line remembers its last level and every write is logged, which makes
//! the server usable on a development machine without real pins.
//!
//! ## Dependency rule
//!
//! Depends on `blinkhub-app` (port traits) and `blinkhub-domain` only.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use blinkhub_app::ports::OutputControl;
use blinkhub_domain::error::OutputError;
use blinkhub_domain::register::OutputId;

/// A bank of simulated output lines.
#[derive(Debug, Default)]
pub struct VirtualOutputs {
    /// Lines that may be driven; `None` accepts any line.
    lines: Option<BTreeSet<OutputId>>,
    levels: Mutex<HashMap<OutputId, bool>>,
}

impl VirtualOutputs {
    /// A bank accepting any output id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A bank exposing only the given lines; others report
    /// [`OutputError::Unavailable`].
    #[must_use]
    pub fn with_lines(lines: impl IntoIterator<Item = OutputId>) -> Self {
        Self {
            lines: Some(lines.into_iter().collect()),
            levels: Mutex::default(),
        }
    }

    /// Last level written to `id`, if it was ever driven.
    #[must_use]
    pub fn level(&self, id: OutputId) -> Option<bool> {
        self.lock().get(&id).copied()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<OutputId, bool>> {
        self.levels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputControl for VirtualOutputs {
    fn set_output(&self, id: OutputId, level: bool) -> Result<(), OutputError> {
        if self.lines.as_ref().is_some_and(|lines| !lines.contains(&id)) {
            return Err(OutputError::Unavailable(id));
        }
        self.lock().insert(id, level);
        tracing::info!(output = %id, level = u8::from(level), "virtual output driven");
        Ok(())
    }
}

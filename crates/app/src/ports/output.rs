//! Output-control port — drives physical output lines.

use std::sync::Arc;

use blinkhub_domain::error::OutputError;
use blinkhub_domain::register::OutputId;

/// Sets the level of an output line.
///
/// Calls are synchronous and must complete in bounded time: they run while
/// the owning register is locked.
pub trait OutputControl {
    /// Drive output `id` high (`true`) or low (`false`).
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if the line cannot be driven.
    fn set_output(&self, id: OutputId, level: bool) -> Result<(), OutputError>;
}

impl<T: OutputControl> OutputControl for Arc<T> {
    fn set_output(&self, id: OutputId, level: bool) -> Result<(), OutputError> {
        (**self).set_output(id, level)
    }
}

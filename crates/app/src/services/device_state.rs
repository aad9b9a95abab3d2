//! Device state — named registers whose writes drive physical outputs.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use blinkhub_domain::error::StateError;
use blinkhub_domain::register::{OutputId, RegisterName, RegisterSnapshot};
use blinkhub_domain::time::now;

use crate::ports::OutputControl;

struct Register {
    output: OutputId,
    snapshot: Mutex<RegisterSnapshot>,
}

impl Register {
    fn lock(&self) -> MutexGuard<'_, RegisterSnapshot> {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shared record of controllable values.
///
/// The set of registers is fixed at construction. Each register has its own
/// lock: [`set`](Self::set) drives the output and stores the new value while
/// holding it, so readers observe either the previous or the new value and
/// the physical output always matches what [`get`](Self::get) reports.
pub struct DeviceState<O> {
    output: O,
    registers: HashMap<RegisterName, Register>,
}

impl<O: OutputControl> DeviceState<O> {
    /// Start declaring registers backed by `output`.
    pub fn builder(output: O) -> DeviceStateBuilder<O> {
        DeviceStateBuilder {
            output,
            declared: Vec::new(),
        }
    }

    /// Whether a register with this name exists.
    #[must_use]
    pub fn contains(&self, register: &RegisterName) -> bool {
        self.registers.contains_key(register)
    }

    /// Names of all declared registers, in no particular order.
    pub fn register_names(&self) -> impl Iterator<Item = &RegisterName> {
        self.registers.keys()
    }

    /// Current value of `register`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnknownRegister`] if no such register exists.
    pub fn get(&self, register: &RegisterName) -> Result<bool, StateError> {
        self.snapshot(register).map(|snapshot| snapshot.value)
    }

    /// Current value of `register` together with its last change time.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnknownRegister`] if no such register exists.
    pub fn snapshot(&self, register: &RegisterName) -> Result<RegisterSnapshot, StateError> {
        Ok(*self.lookup(register)?.lock())
    }

    /// Set `register` to `value`, driving its output in the same step.
    ///
    /// Concurrent calls on one register are serialized; the last to acquire
    /// the lock wins. If the output cannot be driven the stored value is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnknownRegister`] if no such register exists, or
    /// [`StateError::Output`] if the output capability fails.
    #[tracing::instrument(skip(self))]
    pub fn set(&self, register: &RegisterName, value: bool) -> Result<(), StateError> {
        let entry = self.lookup(register)?;
        let mut snapshot = entry.lock();
        if let Err(err) = self.output.set_output(entry.output, value) {
            tracing::error!(error = %err, output = %entry.output, "failed to drive output");
            return Err(err.into());
        }
        if snapshot.value != value {
            snapshot.value = value;
            snapshot.last_changed = now();
            tracing::info!(
                output = %entry.output,
                last_changed = %snapshot.last_changed,
                "register changed"
            );
        }
        Ok(())
    }

    fn lookup(&self, register: &RegisterName) -> Result<&Register, StateError> {
        self.registers
            .get(register)
            .ok_or_else(|| StateError::UnknownRegister(register.clone()))
    }
}

/// Builder returned by [`DeviceState::builder`].
pub struct DeviceStateBuilder<O> {
    output: O,
    declared: Vec<(RegisterName, OutputId, bool)>,
}

impl<O: OutputControl> DeviceStateBuilder<O> {
    /// Declare a register bound to output line `output`, starting at `initial`.
    #[must_use]
    pub fn register(mut self, name: impl Into<RegisterName>, output: OutputId, initial: bool) -> Self {
        self.declared.push((name.into(), output, initial));
        self
    }

    /// Drive every output to its initial value and build the state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateRegister`] if a name was declared twice,
    /// or [`StateError::Output`] if an output cannot be initialised.
    pub fn build(self) -> Result<DeviceState<O>, StateError> {
        let mut registers = HashMap::with_capacity(self.declared.len());
        for (name, output, initial) in self.declared {
            if registers.contains_key(&name) {
                return Err(StateError::DuplicateRegister(name));
            }
            self.output.set_output(output, initial)?;
            tracing::debug!(register = %name, %output, initial, "register initialised");
            let snapshot = RegisterSnapshot {
                value: initial,
                last_changed: now(),
            };
            registers.insert(
                name,
                Register {
                    output,
                    snapshot: Mutex::new(snapshot),
                },
            );
        }
        Ok(DeviceState {
            output: self.output,
            registers,
        })
    }
}

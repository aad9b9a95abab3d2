//! In-memory port implementations shared by the unit tests of this crate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use blinkhub_domain::asset::AssetName;
use blinkhub_domain::error::{AssetError, OutputError};
use blinkhub_domain::register::OutputId;

use crate::ports::{AssetSource, OutputControl};

#[derive(Default)]
pub struct InMemoryAssetSource {
    assets: HashMap<AssetName, Vec<u8>>,
    broken: Vec<AssetName>,
}

impl InMemoryAssetSource {
    pub fn with(mut self, name: &str, contents: &str) -> Self {
        self.assets
            .insert(AssetName::new(name).unwrap(), contents.as_bytes().to_vec());
        self
    }

    /// Reads of `name` fail with an IO error.
    pub fn broken(mut self, name: &str) -> Self {
        self.broken.push(AssetName::new(name).unwrap());
        self
    }
}

impl AssetSource for InMemoryAssetSource {
    fn read(&self, name: &AssetName) -> impl Future<Output = Result<Vec<u8>, AssetError>> + Send {
        let result = if self.broken.contains(name) {
            Err(AssetError::Io {
                name: name.clone(),
                source: std::io::Error::other("disk on fire"),
            })
        } else {
            self.assets
                .get(name)
                .cloned()
                .ok_or_else(|| AssetError::NotFound { name: name.clone() })
        };
        async { result }
    }
}

#[derive(Default)]
pub struct RecordingOutput {
    writes: Mutex<Vec<(OutputId, bool)>>,
    failing: AtomicBool,
}

impl RecordingOutput {
    pub fn writes(&self) -> Vec<(OutputId, bool)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn last_level(&self, id: OutputId) -> Option<bool> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(written, _)| *written == id)
            .map(|(_, level)| *level)
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl OutputControl for RecordingOutput {
    fn set_output(&self, id: OutputId, level: bool) -> Result<(), OutputError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(OutputError::Unavailable(id));
        }
        self.writes.lock().unwrap().push((id, level));
        Ok(())
    }
}

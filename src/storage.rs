use std::{
    fs, io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use directories::ProjectDirs;
use log::debug;

/// Slot name holding the serialized catch list.
pub const CATCHES_SLOT: &str = "catches";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not locate a data directory for this platform")]
    NoDataDirectory,

    #[error("Could not read slot {slot:?}")]
    ReadSlot {
        slot: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not write slot {slot:?}")]
    WriteSlot {
        slot: String,
        #[source]
        source: io::Error,
    },
}

/// A single named slot in a key-value settings store.
///
/// `read` yields `Ok(None)` when the slot has never been written; that is
/// the ordinary first-launch state, not a failure.
pub trait Backend {
    fn read(&self) -> Result<Option<Vec<u8>>, Error>;
    fn write(&self, bytes: &[u8]) -> Result<(), Error>;
}

/// Slot persisted as one file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    slot: String,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            slot: slot.into(),
        }
    }

    /// Resolves the platform data directory for the app.
    pub fn default_location(slot: impl Into<String>) -> Result<Self, Error> {
        let dirs = ProjectDirs::from("com", "creel", "Creel").ok_or(Error::NoDataDirectory)?;
        Ok(Self::new(dirs.data_dir(), slot))
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.slot))
    }
}

impl Backend for FileBackend {
    fn read(&self) -> Result<Option<Vec<u8>>, Error> {
        let path = self.path();
        debug!("Reading slot {} from {}", self.slot, path.display());

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::ReadSlot {
                slot: self.slot.clone(),
                source: err,
            }),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        let path = self.path();
        debug!("Writing slot {} to {}", self.slot, path.display());

        fs::create_dir_all(&self.dir).map_err(|err| Error::WriteSlot {
            slot: self.slot.clone(),
            source: err,
        })?;
        fs::write(&path, bytes).map_err(|err| Error::WriteSlot {
            slot: self.slot.clone(),
            source: err,
        })
    }
}

/// In-process slot for tests and previews. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Arc::new(Mutex::new(Some(bytes.into()))),
        }
    }

    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.data.lock().unwrap().clone()
    }
}

impl Backend for MemoryBackend {
    fn read(&self) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.data.lock().unwrap().clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        *self.data.lock().unwrap() = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path(), CATCHES_SLOT);

        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn file_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        // nested path exercises directory creation on first write
        let backend = FileBackend::new(dir.path().join("data"), CATCHES_SLOT);

        backend.write(b"[]").unwrap();
        assert_eq!(backend.read().unwrap().unwrap(), b"[]");
    }

    #[test]
    fn memory_clones_share_the_slot() {
        let backend = MemoryBackend::new();
        let alias = backend.clone();

        backend.write(b"[1]").unwrap();
        assert_eq!(alias.read().unwrap().unwrap(), b"[1]");
    }
}

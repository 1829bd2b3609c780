use log::{debug, warn};
use tokio::sync::broadcast;

use crate::{
    models::{Catch, CatchId, User},
    storage::{self, Backend, FileBackend, CATCHES_SLOT},
};

const EVENT_CAPACITY: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Could not encode catch list")]
    Encode(#[source] serde_json::Error),

    #[error("Could not write catch list")]
    Write(#[source] storage::Error),
}

/// Why the persisted snapshot could not be restored when the store opened.
///
/// Either way the store recovers to an empty list; this only keeps the
/// first-launch case distinguishable from actual data loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFault {
    /// The backing slot could not be read.
    Read,
    /// The slot held bytes that did not decode as a catch list.
    Decode,
}

/// Published after a mutation has been applied in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(CatchId),
    Deleted(CatchId),
}

/// Owns the ordered catch log and the current user record, backed by a
/// single persisted slot.
///
/// All operations run to completion on the caller's thread; `&mut self` on
/// the mutators is the only exclusion guard the single-mutator model needs.
/// Every mutation re-encodes and persists the whole list before returning.
pub struct CatchStore<B> {
    backend: B,
    catches: Vec<Catch>,
    current_user: Option<User>,
    events: broadcast::Sender<StoreEvent>,
    load_fault: Option<LoadFault>,
}

impl CatchStore<FileBackend> {
    /// Opens the store over the platform data directory.
    pub fn open_default() -> Result<Self, storage::Error> {
        Ok(Self::open(FileBackend::default_location(CATCHES_SLOT)?))
    }
}

impl<B: Backend> CatchStore<B> {
    /// Opens the store, restoring the persisted catch list. An absent slot
    /// or an undecodable one both recover to an empty list; the latter is
    /// logged and remembered as a [`LoadFault`].
    pub fn open(backend: B) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        let (catches, load_fault) = match backend.read() {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Catch>>(&bytes) {
                Ok(catches) => {
                    debug!("Restored {} catches", catches.len());
                    (catches, None)
                }
                Err(err) => {
                    warn!("Discarding undecodable catch list: {err}");
                    (Vec::new(), Some(LoadFault::Decode))
                }
            },
            Ok(None) => (Vec::new(), None),
            Err(err) => {
                warn!("Could not read catch list: {err}");
                (Vec::new(), Some(LoadFault::Read))
            }
        };

        Self {
            backend,
            catches,
            current_user: None,
            events,
            load_fault,
        }
    }

    /// Appends a fully populated catch and persists the whole list.
    ///
    /// On a persist failure the in-memory append is kept and the error is
    /// returned; the on-disk copy stays stale until the next successful
    /// persist.
    pub fn add(&mut self, catch: Catch) -> Result<(), PersistError> {
        debug!("Logging catch {}: {}", catch.id, catch);
        let id = catch.id;
        self.catches.push(catch);

        let persisted = self.persist();
        self.publish(StoreEvent::Added(id));
        persisted
        // TODO: sync to cloud backend once one exists
    }

    /// Removes the catch with the given id, if any, and persists. Deleting
    /// an id that is not present is a no-op: no error, no write, no event.
    pub fn delete(&mut self, id: CatchId) -> Result<(), PersistError> {
        let before = self.catches.len();
        self.catches.retain(|catch| catch.id != id);
        if self.catches.len() == before {
            debug!("No catch {id} to delete");
            return Ok(());
        }

        debug!("Deleted catch {id}");
        let persisted = self.persist();
        self.publish(StoreEvent::Deleted(id));
        persisted
    }

    /// The current ordered catch sequence, oldest first.
    pub fn snapshot(&self) -> &[Catch] {
        &self.catches
    }

    /// Change notifications for screens observing the log.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn load_fault(&self) -> Option<LoadFault> {
        self.load_fault
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn set_current_user(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub fn clear_current_user(&mut self) {
        self.current_user = None;
    }

    fn persist(&self) -> Result<(), PersistError> {
        let result = serde_json::to_vec(&self.catches)
            .map_err(PersistError::Encode)
            .and_then(|bytes| self.backend.write(&bytes).map_err(PersistError::Write));

        if let Err(err) = &result {
            warn!("Catch list is stale on disk: {err}");
        }
        result
    }

    fn publish(&self, event: StoreEvent) {
        // send only fails when nobody is subscribed
        let _ = self.events.send(event);
    }
}

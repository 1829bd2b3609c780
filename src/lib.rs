#![forbid(unsafe_code)]

pub mod auth;
pub mod classify;
pub mod draft;
pub mod leaderboard;
pub mod location;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;

pub use crate::{
    classify::{Classification, Classifier},
    draft::CatchDraft,
    location::{Coordinates, LocationProvider},
    models::{Catch, CatchId, FishingLocation, User},
    storage::{Backend, FileBackend, MemoryBackend},
    store::{CatchStore, LoadFault, PersistError, StoreEvent},
};

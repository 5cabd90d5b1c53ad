//! Play history persistence
//!
//! Features:
//! - Versioned JSON envelope
//! - Any [`KeyValueStore`] backend (LocalStorage, files, memory)
//! - Corrupt or unknown-version data reported as errors, never panics
//! - Saving over a corrupt envelope backs it up and starts fresh
//!
//! The game treats every failure here as best-effort: it logs and moves on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::PlayResult;
use crate::platform::KeyValueStore;

/// Current envelope version
pub const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
    #[error("storage is unavailable")]
    Unavailable,
}

/// Storage of the play history
pub trait Persistence {
    fn save(&mut self, result: &PlayResult) -> Result<(), PersistenceError>;
    fn load_results(&self) -> Result<Vec<PlayResult>, PersistenceError>;
    fn reset_results(&mut self) -> Result<(), PersistenceError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    results: Vec<PlayResult>,
}

/// Play history kept as one JSON envelope under a single key
#[derive(Debug, Clone)]
pub struct ResultStore<S> {
    store: S,
}

impl<S: KeyValueStore> ResultStore<S> {
    /// Storage key of the envelope
    pub const KEY: &'static str = "great_ape_results";
    /// Key an unreadable envelope is moved to before it is overwritten
    pub const BACKUP_KEY: &'static str = "great_ape_results_corrupt";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn write(&mut self, results: Vec<PlayResult>) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&Envelope {
            version: ENVELOPE_VERSION,
            results,
        })?;
        self.store.set(Self::KEY, &json)
    }

    /// Move an unparseable envelope aside so new results can be stored
    fn quarantine(&mut self) -> Result<(), PersistenceError> {
        if let Some(raw) = self.store.get(Self::KEY)? {
            self.store.set(Self::BACKUP_KEY, &raw)?;
        }
        self.store.remove(Self::KEY)
    }
}

impl<S: KeyValueStore> Persistence for ResultStore<S> {
    fn save(&mut self, result: &PlayResult) -> Result<(), PersistenceError> {
        let mut results = match self.load_results() {
            Ok(results) => results,
            Err(PersistenceError::Json(e)) => {
                log::warn!("Stored history is corrupt ({e}), starting a fresh one");
                self.quarantine()?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        results.push(*result);
        self.write(results)
    }

    fn load_results(&self) -> Result<Vec<PlayResult>, PersistenceError> {
        let Some(json) = self.store.get(Self::KEY)? else {
            return Ok(Vec::new());
        };
        let envelope: Envelope = serde_json::from_str(&json)?;
        if envelope.version > ENVELOPE_VERSION {
            return Err(PersistenceError::UnsupportedVersion(envelope.version));
        }
        log::debug!("Loaded {} results", envelope.results.len());
        Ok(envelope.results)
    }

    fn reset_results(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(Self::KEY)
    }
}

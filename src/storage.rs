//! Persisted currency-selection storage
//!
//! The selected display currency survives navigation for the duration of a
//! visitor session. Persistence is best-effort: a failed save must never
//! break the visitor's flow, and anything loaded is re-validated by the
//! selection state before it becomes current.

use crate::currency::CurrencyCode;
use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

/// Boundary to wherever the session keeps its currency choice
pub trait SelectionStore {
    /// Load the persisted choice, if any
    fn load(&self) -> Result<Option<CurrencyCode>>;

    /// Persist the current choice
    fn save(&self, code: CurrencyCode) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSelection {
    currency: CurrencyCode,
    saved_at: DateTime<Utc>,
}

/// JSON-file-backed store with a session max-age
///
/// A missing file, a corrupt payload, or a payload older than the max-age
/// all load as "nothing persisted". Corruption is logged and otherwise
/// ignored, matching the best-effort contract.
pub struct JsonFileStore {
    path: PathBuf,
    max_age: Duration,
}

impl JsonFileStore {
    /// Create a store at the given path with the default 24h session age
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_age: Duration::hours(24),
        }
    }

    /// Override how long a persisted choice stays valid
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }
}

impl SelectionStore for JsonFileStore {
    fn load(&self) -> Result<Option<CurrencyCode>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let stored: StoredSelection = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!(
                    "ignoring corrupt currency selection at {}: {}",
                    self.path.display(),
                    err
                );
                return Ok(None);
            }
        };

        if Utc::now() - stored.saved_at > self.max_age {
            log::debug!(
                "ignoring stale currency selection saved at {}",
                stored.saved_at
            );
            return Ok(None);
        }

        Ok(Some(stored.currency))
    }

    fn save(&self, code: CurrencyCode) -> Result<()> {
        let stored = StoredSelection {
            currency: code,
            saved_at: Utc::now(),
        };
        fs::write(&self.path, serde_json::to_string(&stored)?)?;
        Ok(())
    }
}

/// In-memory store for tests and single-process hosts
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slot: RefCell<Option<CurrencyCode>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, as if a previous session had saved
    pub fn with_saved(code: CurrencyCode) -> Self {
        Self {
            slot: RefCell::new(Some(code)),
        }
    }
}

impl SelectionStore for InMemoryStore {
    fn load(&self) -> Result<Option<CurrencyCode>> {
        Ok(*self.slot.borrow())
    }

    fn save(&self, code: CurrencyCode) -> Result<()> {
        *self.slot.borrow_mut() = Some(code);
        Ok(())
    }
}

//! Session-scoped persistence of the last active application.
//!
//! The controller writes a snapshot when the home menu opens and reads it
//! back when the menu closes. Stores never fail at this surface: anything
//! unreadable is reported as "no record".

mod session;

pub use session::{SESSION_ENV, SessionFileStore, default_session_id};

use homenav_types::LastApplicationRecord;
use tracing::debug;

/// Fixed storage key reserved for the last-application record.
pub const LAST_APP_KEY: &str = "homenav_last_app";

/// Capability for persisting the last active application within one session.
pub trait LastApplicationStore {
    /// Overwrite any existing record.
    fn save(&mut self, record: &LastApplicationRecord);

    /// Most recent record of this session, or `None` if absent or unreadable.
    fn load(&self) -> Option<LastApplicationRecord>;

    fn clear(&mut self);
}

impl<S: LastApplicationStore + ?Sized> LastApplicationStore for Box<S> {
    fn save(&mut self, record: &LastApplicationRecord) {
        (**self).save(record);
    }

    fn load(&self) -> Option<LastApplicationRecord> {
        (**self).load()
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

/// Decode stored text, treating malformed data as absent.
pub(crate) fn parse_record(raw: &str) -> Option<LastApplicationRecord> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!(
                "Ignoring unreadable last-app record: {} (at line {}, column {})",
                e,
                e.line(),
                e.column()
            );
            None
        }
    }
}

pub(crate) fn encode_record(record: &LastApplicationRecord) -> String {
    // Two plain string fields cannot fail to serialize
    serde_json::to_string(record).unwrap_or_default()
}

/// In-memory store holding the serialized record, like a session storage slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with arbitrary text, e.g. corrupt data.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl LastApplicationStore for MemoryStore {
    fn save(&mut self, record: &LastApplicationRecord) {
        self.raw = Some(encode_record(record));
    }

    fn load(&self) -> Option<LastApplicationRecord> {
        self.raw.as_deref().and_then(parse_record)
    }

    fn clear(&mut self) {
        self.raw = None;
    }
}

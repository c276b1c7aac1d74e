use super::{LAST_APP_KEY, LastApplicationStore, encode_record, parse_record};
use crate::Result;
use crate::config::Directories;
use homenav_types::LastApplicationRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming the current session
pub const SESSION_ENV: &str = "HOMENAV_SESSION";

/// Session id from `HOMENAV_SESSION`, falling back to this process id.
#[must_use]
pub fn default_session_id() -> String {
    std::env::var(SESSION_ENV)
        .ok()
        .map(|id| sanitize_session_id(&id))
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| std::process::id().to_string())
}

/// Keep session ids usable as a single path component
fn sanitize_session_id(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File-backed store scoped to one session directory.
///
/// The record lives at `<session_root>/<session_id>/homenav_last_app.json`.
/// Ending the session removes the whole directory so nothing carries over.
#[derive(Debug, Clone)]
pub struct SessionFileStore {
    session_dir: PathBuf,
}

impl SessionFileStore {
    #[must_use]
    pub fn new(dirs: &Directories, session_id: &str) -> Self {
        let session_id = match sanitize_session_id(session_id) {
            id if id.is_empty() => std::process::id().to_string(),
            id => id,
        };
        Self {
            session_dir: dirs.session_dir(&session_id),
        }
    }

    #[must_use]
    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    #[must_use]
    pub fn record_path(&self) -> PathBuf {
        self.session_dir.join(format!("{LAST_APP_KEY}.json"))
    }

    /// Write the record, creating the session directory on demand.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn try_save(&self, record: &LastApplicationRecord) -> Result<()> {
        std::fs::create_dir_all(&self.session_dir)?;
        std::fs::write(self.record_path(), encode_record(record))?;
        debug!("Saved last app '{}' to {}", record.id, self.record_path().display());
        Ok(())
    }

    /// Remove all state of this session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory exists but cannot be removed.
    pub fn end_session(&self) -> Result<()> {
        match std::fs::remove_dir_all(&self.session_dir) {
            Ok(()) => {
                info!("Ended session at {}", self.session_dir.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl LastApplicationStore for SessionFileStore {
    fn save(&mut self, record: &LastApplicationRecord) {
        if let Err(e) = self.try_save(record) {
            warn!("Failed to persist last app '{}': {}", record.id, e);
        }
    }

    fn load(&self) -> Option<LastApplicationRecord> {
        let path = self.record_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => parse_record(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No last app record at {}", path.display());
                None
            }
            Err(e) => {
                debug!("Could not read last app record {}: {}", path.display(), e);
                None
            }
        }
    }

    fn clear(&mut self) {
        match std::fs::remove_file(self.record_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to clear last app record: {}", e),
        }
    }
}

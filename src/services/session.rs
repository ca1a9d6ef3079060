//! Durable session storage
//!
//! The browser-era client kept its token in local storage under a fixed key;
//! here the session lives in a small JSON file so it survives restarts.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::error::{ClientError, ClientResult};
use crate::models::user::Session;

/// File-backed session store. A missing or unreadable file means no session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted session, if any
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!("ignoring corrupt session file: {}", err);
                None
            }
        }
    }

    /// Persist the session, overwriting any previous one
    pub fn save(&self, session: &Session) -> ClientResult<()> {
        let raw = serde_json::to_string(session)
            .map_err(|err| ClientError::Internal(format!("failed to encode session: {}", err)))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Remove the stored session; a missing file is not an error
    pub fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

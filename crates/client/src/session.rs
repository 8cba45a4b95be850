//! Persisted login session.
//!
//! The token and the public user profile are stored together in one JSON
//! file so a restarted client can resume without asking for credentials
//! again. An expired token is only discovered on the next gated request,
//! which surfaces as [`ClientError::Unauthorized`] and should clear the
//! file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ClientError, UserProfile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn new(token: String, user: UserProfile) -> Self {
        Self { token, user }
    }

    /// Reads a previously saved session. A missing file is not an error,
    /// it just means nobody is logged in.
    pub fn load(path: &Path) -> Result<Option<Session>, ClientError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        let session: Session = serde_json::from_str(&raw)?;
        debug!(username = %session.user.username, "Restored session");
        Ok(Some(session))
    }

    pub fn save(&self, path: &Path) -> Result<(), ClientError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Deletes the session file, ignoring the case where it never existed.
    pub fn clear(path: &Path) -> Result<(), ClientError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

//! Persisted session — the bearer token, saved as JSON across runs.
//!
//! Missing or corrupt files load as the default (logged out); nothing here
//! ever fails a startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Load from disk. Returns the default session if the file is missing
    /// or unparseable.
    pub fn load(path: &Path) -> Session {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Session::default(),
        }
    }

    /// Save to disk, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("tradelog_session_test");
        let path = dir.join("session.json");

        let session = Session {
            token: Some("tok_123".into()),
        };
        session.save(&path).unwrap();

        let loaded = Session::load(&path);
        assert_eq!(loaded.token.as_deref(), Some("tok_123"));
        assert!(loaded.is_authenticated());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_logged_out() {
        let loaded = Session::load(Path::new("/nonexistent/path/session.json"));
        assert!(!loaded.is_authenticated());
    }

    #[test]
    fn corrupt_file_is_logged_out() {
        let dir = std::env::temp_dir().join("tradelog_session_corrupt");
        let path = dir.join("session.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        assert!(!Session::load(&path).is_authenticated());

        let _ = std::fs::remove_dir_all(&dir);
    }
}

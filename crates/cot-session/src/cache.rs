//! Session cache side-channel
//!
//! Persists the authenticated subject under a fixed key so a session
//! survives a restart. Restore is trust-on-read: a cached subject is
//! treated as authenticated without consulting the user collection, so a
//! deleted user's cached session remains valid until logout. That matches
//! the observed behavior and is flagged, not fixed.

use crate::gate::Subject;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Fixed key the current subject is stored under
pub const SESSION_KEY: &str = "currentUser";

/// Session cache failures
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Underlying storage I/O failed
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    /// Cached payload could not be (de)serialized
    #[error("cache serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Key-value cache for the serialized session subject
///
/// Writes are synchronous; there is no deferred flush.
pub trait SessionCache {
    /// Load the subject cached under [`SESSION_KEY`], if any
    ///
    /// # Errors
    /// `CacheError` if the backing storage fails or holds an unreadable
    /// payload.
    fn load(&self) -> Result<Option<Subject>, CacheError>;

    /// Store the subject under [`SESSION_KEY`]
    ///
    /// # Errors
    /// `CacheError` if the backing storage fails.
    fn save(&mut self, subject: &Subject) -> Result<(), CacheError>;

    /// Clear [`SESSION_KEY`]
    ///
    /// # Errors
    /// `CacheError` if the backing storage fails.
    fn clear(&mut self) -> Result<(), CacheError>;
}

/// In-process cache, dropped with the process
#[derive(Debug, Clone, Default)]
pub struct MemorySessionCache {
    entries: HashMap<String, String>,
}

impl MemorySessionCache {
    /// Create an empty cache
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for MemorySessionCache {
    fn load(&self) -> Result<Option<Subject>, CacheError> {
        match self.entries.get(SESSION_KEY) {
            Some(payload) => Ok(Some(serde_json::from_str(payload)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, subject: &Subject) -> Result<(), CacheError> {
        let payload = serde_json::to_string(subject)?;
        self.entries.insert(SESSION_KEY.to_string(), payload);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CacheError> {
        self.entries.remove(SESSION_KEY);
        Ok(())
    }
}

/// File-backed cache, one JSON file per key under a directory
///
/// The per-browser local storage analog: survives restarts of the same
/// installation, cleared on logout.
#[derive(Debug, Clone)]
pub struct FileSessionCache {
    dir: PathBuf,
}

impl FileSessionCache {
    /// Create a cache rooted at `dir`
    ///
    /// The directory is created on first save, not here.
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self) -> PathBuf {
        self.dir.join(format!("{SESSION_KEY}.json"))
    }
}

impl SessionCache for FileSessionCache {
    fn load(&self) -> Result<Option<Subject>, CacheError> {
        let path = self.key_path();
        if !path.exists() {
            return Ok(None);
        }
        let payload = std::fs::read_to_string(&path)?;
        debug!(path = %path.display(), "session restored from cache");
        Ok(Some(serde_json::from_str(&payload)?))
    }

    fn save(&mut self, subject: &Subject) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.dir)?;
        let payload = serde_json::to_string(subject)?;
        std::fs::write(self.key_path(), payload)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CacheError> {
        let path = self.key_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

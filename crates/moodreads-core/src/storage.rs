//! Session-scoped key-value storage.
//!
//! The core only talks to [`SessionStore`]. Every call may fail (storage can
//! be disabled outright, as in private browsing); callers treat a failed
//! read as "absent" and a failed write as "dropped".
//!
//! - [`MemoryStore`]: process-lifetime store, the default session scope
//! - [`FileSessionStore`]: JSON map on disk, survives an app restart

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::error::{MoodError, MoodResult};

/// Minimal session storage contract.
pub trait SessionStore {
    fn get(&self, key: &str) -> MoodResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> MoodResult<()>;
    fn remove(&self, key: &str) -> MoodResult<()>;
}

/// In-memory store. Can be switched into a failing mode to model
/// unavailable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.set_available(false);
        store
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    fn check(&self) -> MoodResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(MoodError::StorageUnavailable(
                "session storage is disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> MoodResult<Option<String>> {
        self.check()?;
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> MoodResult<()> {
        self.check()?;
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> MoodResult<()> {
        self.check()?;
        self.entries.write().remove(key);
        Ok(())
    }
}

/// JSON-file backed store. The whole map is rewritten on every change.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open (or lazily create) a session file.
    ///
    /// This will create the parent directory if it doesn't exist. A missing
    /// file starts an empty session.
    pub fn open(path: impl AsRef<Path>) -> MoodResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> MoodResult<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, raw).map_err(|e| MoodError::Storage(e.to_string()))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> MoodResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> MoodResult<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> MoodResult<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// Best-effort accessors for the easter-egg unlock flag.
///
/// None of these return errors: storage failures are logged and read as
/// "locked" / "write dropped".
pub mod unlock_flag {
    use super::SessionStore;

    pub const KEY: &str = "easter_egg_unlocked";

    /// Whether the flag is persisted. Absent or unreadable reads as false.
    pub fn is_unlocked(store: &dyn SessionStore) -> bool {
        match store.get(KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unavailable, reading easter egg as locked");
                false
            }
        }
    }

    /// Persist the flag. Returns whether the write landed.
    pub fn persist(store: &dyn SessionStore) -> bool {
        match store.set(KEY, "true") {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save easter egg state to session storage");
                tracing::info!("Easter egg stays unlocked in memory but will not survive a reload");
                false
            }
        }
    }

    /// Unlock without the gesture.
    pub fn force_unlock(store: &dyn SessionStore) {
        if let Err(e) = store.set(KEY, "true") {
            tracing::warn!(error = %e, "Failed to force unlock easter egg");
        }
    }

    /// Clear the persisted flag.
    pub fn reset(store: &dyn SessionStore) {
        if let Err(e) = store.remove(KEY) {
            tracing::warn!(error = %e, "Failed to reset easter egg state");
        }
    }
}

//! JSON file key/value store.
//!
//! The whole map is rewritten on every `set`/`remove` through a temporary
//! file and a rename, so a crash never leaves a half-written file behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::ports::outbound::KeyValueStore;

/// String map persisted as a flat JSON object.
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileKeyValueStore {
    /// Open `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> ScheduleResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| storage(&path, e))?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|e| ScheduleError::Storage {
                    reason: format!("{} is not a JSON string map: {e}", path.display()),
                })?
            }
        } else {
            BTreeMap::new()
        };

        debug!("[st-02] Opened key/value store {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> ScheduleResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage(parent, e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| ScheduleError::Storage {
            reason: e.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| storage(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage(&self.path, e))
    }
}

fn storage(path: &Path, err: std::io::Error) -> ScheduleError {
    ScheduleError::Storage {
        reason: format!("{}: {err}", path.display()),
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> ScheduleResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ScheduleResult<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> ScheduleResult<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

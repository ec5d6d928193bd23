//! Persistent settings storage
//!
//! The host application gives the channel a small key/value store for
//! per-channel state; here that is a JSON file (or an in-memory map for
//! tests). The only state this channel persists is the cached session
//! signature.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ChannelError, Result};

/// Key/value settings storage.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory settings, used in tests and by hosts without persistence.
#[derive(Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().expect("settings lock").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .expect("settings lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed settings: a flat JSON object, loaded once and rewritten on
/// every set.
pub struct JsonFileSettings {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl JsonFileSettings {
    /// Open (or create) the settings file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| ChannelError::Settings(format!("read {}: {e}", path.display())))?;
            serde_json::from_str(&raw)
                .map_err(|e| ChannelError::Settings(format!("parse {}: {e}", path.display())))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    fn flush(&self, values: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(values)
            .map_err(|e| ChannelError::Settings(e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| ChannelError::Settings(format!("write {}: {e}", self.path.display())))
    }
}

impl SettingsStore for JsonFileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().expect("settings lock").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().expect("settings lock");
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }
}

//! Key-value persistence surface
//!
//! Two scopes: durable values survive restarts (theme preference),
//! session values live only as long as the process (navigation history).
//! Durable file: ~/.local/share/exorcism-guide/storage.json

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key of the persisted theme
pub const THEME_KEY: &str = "theme";

/// Storage key of the session navigation history
pub const HISTORY_KEY: &str = "navigationHistory";

/// Lifetime of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Durable,
    Session,
}

/// Key-value string storage
pub trait Storage {
    fn get(&self, scope: Scope, key: &str) -> Option<String>;
    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for both scopes
#[derive(Debug, Default)]
pub struct MemoryStorage {
    durable: BTreeMap<String, String>,
    session: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, scope: Scope) -> &BTreeMap<String, String> {
        match scope {
            Scope::Durable => &self.durable,
            Scope::Session => &self.session,
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        self.map(scope).get(key).cloned()
    }

    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<(), StorageError> {
        let map = match scope {
            Scope::Durable => &mut self.durable,
            Scope::Session => &mut self.session,
        };
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable scope backed by a JSON file, session scope in memory
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    durable: BTreeMap<String, String>,
    session: BTreeMap<String, String>,
}

impl FileStorage {
    /// Default durable storage path
    pub fn default_path() -> Result<PathBuf, StorageError> {
        let data_dir = dirs::data_dir()
            .ok_or(StorageError::NoDataDir)?
            .join("exorcism-guide");
        Ok(data_dir.join("storage.json"))
    }

    /// Open storage at the default location
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::open(Self::default_path()?))
    }

    /// Open storage at `path`; a missing or corrupt file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let durable = read_map(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable storage file");
            BTreeMap::new()
        });

        Self {
            path,
            durable,
            session: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.durable)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        match scope {
            Scope::Durable => self.durable.get(key).cloned(),
            Scope::Session => self.session.get(key).cloned(),
        }
    }

    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<(), StorageError> {
        match scope {
            Scope::Durable => {
                self.durable.insert(key.to_string(), value.to_string());
                self.flush()
            }
            Scope::Session => {
                self.session.insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }
}

fn read_map(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

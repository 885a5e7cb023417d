//! Theme flag persistence
//!
//! The engine persists exactly one value: the last-set scheme name under the
//! key `"theme"`. Stores are deliberately dumb key-value surfaces so tests
//! can swap in memory-backed ones.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// The single persisted key
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access theme store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode theme store: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Key-value persistence for the theme flag
pub trait ThemeStore {
    /// Read a stored value, `None` when absent or unreadable
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value for a key
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemeFile {
    theme: Option<String>,
}

/// TOML-file-backed store (a one-table document, `theme = "dark"`)
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_file(&self) -> ThemeFile {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return ThemeFile::default();
        };
        toml::from_str(&raw).unwrap_or_else(|err| {
            tracing::debug!(path = %self.path.display(), %err, "ignoring malformed theme file");
            ThemeFile::default()
        })
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self, key: &str) -> Option<String> {
        if key != THEME_KEY {
            return None;
        }
        self.read_file().theme
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if key != THEME_KEY {
            return Ok(());
        }
        let file = ThemeFile {
            theme: Some(value.to_string()),
        };
        let encoded = toml::to_string(&file)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral embedders
#[derive(Default)]
pub struct MemoryThemeStore {
    entries: Vec<(String, String)>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before the controller first reads it
    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            entries: vec![(key.to_string(), value.to_string())],
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
        Ok(())
    }
}

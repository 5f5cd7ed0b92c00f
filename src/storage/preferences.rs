use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ui::theme::Theme;

pub const THEME_KEY: &str = "calendar-theme";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// String key-value persistence for user preferences.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept as a flat TOML table on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        crate::storage::config::Config::config_dir().join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(&entries)?)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the saved theme. Missing, unknown or unreadable values fall back to
/// the default theme.
pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(key)) => Theme::from_key(&key).unwrap_or_else(|| {
            tracing::warn!("Ignoring unknown saved theme '{}'", key);
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::error!("Failed to read theme preference: {}", e);
            Theme::default()
        }
    }
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: &Theme) -> Result<(), PreferenceError> {
    tracing::info!("Saving theme preference: {}", theme.key);
    store.set(THEME_KEY, theme.key)
}

//! Persistent game settings
//!
//! Menu options are backed by integer values grouped into named sections.
//! [`SettingsStore`] is the interface the menu uses; [`FileSettings`] keeps the
//! values in a TOML file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings store errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the settings file failed
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed
    #[error("Settings parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be serialized
    #[error("Settings serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Integer settings grouped by section
pub trait SettingsStore {
    /// Read a value, `0` when it was never set
    fn get_int(&self, section: &str, key: &str) -> i32;

    /// Write a value
    fn set_int(&mut self, section: &str, key: &str, value: i32);

    /// Persist pending changes
    fn flush(&mut self) -> Result<(), SettingsError>;
}

type Sections = BTreeMap<String, BTreeMap<String, i32>>;

/// TOML-backed settings store
///
/// ```toml
/// [GAME]
/// subtitles = 1
/// ```
#[derive(Debug, Default)]
pub struct FileSettings {
    path: Option<PathBuf>,
    sections: Sections,
    dirty: bool,
}

impl FileSettings {
    /// Settings that live only in memory; `flush` is a no-op
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open settings stored at `path`, starting empty if the file does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let sections = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            toml::from_str(&text)?
        } else {
            log::info!("Settings file {} not found, starting empty", path.display());
            Sections::new()
        };

        Ok(Self {
            path: Some(path),
            sections,
            dirty: false,
        })
    }

    /// Whether values changed since the last flush
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl SettingsStore for FileSettings {
    fn get_int(&self, section: &str, key: &str) -> i32 {
        self.sections
            .get(section)
            .and_then(|values| values.get(key))
            .copied()
            .unwrap_or(0)
    }

    fn set_int(&mut self, section: &str, key: &str, value: i32) {
        log::debug!("Settings [{}] {} = {}", section, key, value);
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self.dirty = true;
    }

    fn flush(&mut self) -> Result<(), SettingsError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(path) = &self.path {
            let text = toml::to_string_pretty(&self.sections)?;
            std::fs::write(path, text)?;
            log::debug!("Settings written to {}", path.display());
        }
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_reads_zero() {
        let settings = FileSettings::in_memory();
        assert_eq!(settings.get_int("GAME", "subtitles"), 0);
    }

    #[test]
    fn test_set_then_get() {
        let mut settings = FileSettings::in_memory();
        settings.set_int("GAME", "subtitles", 1);
        settings.set_int("VIDEO", "zVidBrightness", 7);
        assert_eq!(settings.get_int("GAME", "subtitles"), 1);
        assert_eq!(settings.get_int("VIDEO", "zVidBrightness"), 7);
        assert!(settings.is_dirty());
        settings.flush().unwrap();
        assert!(!settings.is_dirty());
    }

    #[test]
    fn test_flush_persists_to_file() {
        let path = std::env::temp_dir().join(format!("rpg_engine_settings_{}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut settings = FileSettings::open(&path).unwrap();
        settings.set_int("SOUND", "musicEnabled", 1);
        settings.flush().unwrap();

        let reopened = FileSettings::open(&path).unwrap();
        assert_eq!(reopened.get_int("SOUND", "musicEnabled"), 1);
        let _ = std::fs::remove_file(&path);
    }
}

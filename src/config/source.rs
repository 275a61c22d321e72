//! Key/value settings stores

use crate::error::{AgeControlError, Result};
use crate::scale::take_number;
use ahash::AHashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A store of named settings, each holding raw text
pub trait SettingsSource {
    /// Raw contents of `key`, or `None` if it was never set
    fn contents(&self, key: &str) -> Option<String>;

    /// Replace the contents of `key`
    fn set_contents(&mut self, key: &str, value: &str) -> Result<()>;

    fn has_setting(&self, key: &str) -> bool {
        self.contents(key).is_some()
    }

    /// Leading number of `key` read scanf `%f` style, so trailing text is
    /// ignored. Falls back to `default` when missing or unparsable.
    fn float_setting(&self, key: &str, default: f64) -> f64 {
        let Some(raw) = self.contents(key) else {
            return default;
        };
        match take_number(&raw) {
            Some((value, _)) => value,
            None => {
                warn!(key, raw = raw.as_str(), default, "unparsable float setting");
                default
            }
        }
    }

    /// Store `value` with six decimals, as `printf("%f")` writes it
    fn set_float(&mut self, key: &str, value: f64) -> Result<()> {
        self.set_contents(key, &format!("{:.6}", value))
    }
}

/// In-memory settings, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: AHashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a flat JSON object. Numbers are stored as their decimal
    /// text, strings verbatim.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or_else(|| {
            AgeControlError::DeserializationError("settings must be a JSON object".to_string())
        })?;

        let mut settings = Self::new();
        for (key, value) in object {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(AgeControlError::InvalidSetting {
                        key: key.clone(),
                        reason: format!("expected a number or string, got {}", other),
                    })
                }
            };
            settings.insert(key.clone(), text);
        }
        Ok(settings)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemorySettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Self::new();
        for (key, value) in iter {
            settings.insert(key, value);
        }
        settings
    }
}

impl SettingsSource for MemorySettings {
    fn contents(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_contents(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

/// Settings stored one file per key as `<root>/<key>.ini`
#[derive(Debug, Clone)]
pub struct DirSettings {
    root: PathBuf,
}

impl DirSettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.ini", key))
    }
}

impl SettingsSource for DirSettings {
    /// An existing file always counts as set. Invalid UTF-8 is replaced and
    /// an unreadable file reads as empty.
    fn contents(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read setting");
                Some(String::new())
            }
        }
    }

    fn set_contents(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

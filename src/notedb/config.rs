use crate::error::{NoteError, Result};
use crate::store::fs::replace_file;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "notes.json";
const DEFAULT_PRIORITY: &str = "low";

/// Configuration for notedb, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotedbConfig {
    /// Note file, relative to the notedb home unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Priority given to notes created without one
    #[serde(default = "default_priority")]
    pub default_priority: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl Default for NotedbConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_priority: default_priority(),
        }
    }
}

impl NotedbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NoteError::Io)?;
        let config: NotedbConfig =
            serde_json::from_str(&content).map_err(NoteError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NoteError::Serialization)?;
        replace_file(&config_path, &content)
    }

    /// Absolute location of the note file for a given home directory
    pub fn data_path(&self, home: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            home.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "default-priority" => Some(self.default_priority.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("Value for {} cannot be empty", key));
        }
        match key {
            "data-file" => self.data_file = value.to_string(),
            "default-priority" => self.default_priority = value.to_lowercase(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["data-file", "default-priority"]
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HfError, Result};

/// Runtime configuration, merged from defaults, the global config file,
/// the data-root config file, and environment overrides (in that order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colored terminal output. Robot mode ignores this.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database file name under the data root.
    pub db_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_file: "hf.db".to_string(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("HF_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(local) = Self::load_patch(&root.join("config.toml"))? {
                config.merge_patch(local);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| HfError::MissingConfig("config directory not found".to_string()))?
            .join("habitforge/config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| HfError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| HfError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(display) = patch.display {
            if let Some(color) = display.color {
                self.display.color = color;
            }
        }
        if let Some(storage) = patch.storage {
            if let Some(db_file) = storage.db_file {
                self.storage.db_file = db_file;
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("HF_NO_COLOR").is_some() {
            self.display.color = false;
        }
        if let Ok(db_file) = std::env::var("HF_DB_FILE") {
            if !db_file.is_empty() {
                self.storage.db_file = db_file;
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    display: Option<DisplayPatch>,
    storage: Option<StoragePatch>,
}

#[derive(Debug, Default, Deserialize)]
struct DisplayPatch {
    color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct StoragePatch {
    db_file: Option<String>,
}

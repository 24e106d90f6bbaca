use crate::dict::types::DictionaryConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "keytrie";
const CONFIG_FILE: &str = "config.json";

/// User configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeytrieConfig {
    /// Scoring and bigram settings handed to the dictionary
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Number of candidates the CLI prints
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Word list used when `--dict` is not given
    #[serde(default)]
    pub word_list: Option<PathBuf>,

    /// Hunspell-style `KEY` rows for adjacent-key alternates
    #[serde(default = "default_keyboard_layout")]
    pub keyboard_layout: String,
}

fn default_suggestion_limit() -> usize {
    10
}

fn default_keyboard_layout() -> String {
    "qwertyuiop|asdfghjkl|zxcvbnm".to_string()
}

impl Default for KeytrieConfig {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            suggestion_limit: default_suggestion_limit(),
            word_list: None,
            keyboard_layout: default_keyboard_layout(),
        }
    }
}

impl KeytrieConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load config from `path`, or return default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

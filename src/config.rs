use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PargrepError, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Worker count override; the CPU count is used when unset.
    pub threads: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub highlight: bool,
    pub show_summary: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            highlight: true,
            show_summary: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::find_config_path() {
            Some(path) => {
                let content = fs::read_to_string(&path).map_err(PargrepError::Io)?;
                toml::from_str(&content).map_err(|e| {
                    PargrepError::Config(format!(
                        "failed to parse {}: {e}",
                        path.display()
                    ))
                })
            }
            None => Ok(Self::default()),
        }
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Some(xdg_config) = dirs::config_dir() {
            let xdg_path = xdg_config.join("pargrep/config.toml");
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_path = home.join(".pargrep.toml");
            if home_path.exists() {
                return Some(home_path);
            }
        }

        let current_path = Path::new(".pargrep.toml");
        if current_path.exists() {
            return Some(current_path.to_path_buf());
        }

        None
    }
}

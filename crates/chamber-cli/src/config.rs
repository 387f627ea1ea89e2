//! Application configuration management.
//!
//! This module handles loading and saving the page configuration: where
//! the member data file lives and which directory member images are
//! served from.
//!
//! Configuration is stored at `~/.config/chamber-directory/config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chamber_core::DataSource;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "chamber-directory";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Data file used by the member directory page
const DIRECTORY_SOURCE: &str = "data/members.json";

/// Data file used by the chamber landing page
const CHAMBER_SOURCE: &str = "data/chamber.json";

const IMAGE_BASE: &str = "images/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: String,
    pub image_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::directory_page()
    }
}

impl Config {
    /// Settings of the member directory page
    pub fn directory_page() -> Self {
        Self {
            source: DIRECTORY_SOURCE.to_string(),
            image_base: IMAGE_BASE.to_string(),
        }
    }

    /// Settings of the chamber landing page
    pub fn chamber_page() -> Self {
        Self {
            source: CHAMBER_SOURCE.to_string(),
            image_base: IMAGE_BASE.to_string(),
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.source)
    }
}

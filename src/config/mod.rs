// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Two things persist across sessions: the sort method last chosen by the
//! user and the list of recently opened folders (most recent first).
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config, SortMethod};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.sort_method = Some(SortMethod::DateNewest);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// How the images of a folder are ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMethod {
    #[default]
    NameAsc,
    NameDesc,
    DateNewest,
    DateOldest,
    SizeLargest,
    SizeSmallest,
}

impl SortMethod {
    /// All methods, in the order they appear in the sort picker.
    pub const ALL: [SortMethod; 6] = [
        SortMethod::NameAsc,
        SortMethod::NameDesc,
        SortMethod::DateNewest,
        SortMethod::DateOldest,
        SortMethod::SizeLargest,
        SortMethod::SizeSmallest,
    ];

    /// Human-readable label shown in the sort picker.
    pub fn label(&self) -> &'static str {
        match self {
            SortMethod::NameAsc => "Name (A-Z)",
            SortMethod::NameDesc => "Name (Z-A)",
            SortMethod::DateNewest => "Date (newest)",
            SortMethod::DateOldest => "Date (oldest)",
            SortMethod::SizeLargest => "Size (largest)",
            SortMethod::SizeSmallest => "Size (smallest)",
        }
    }
}

impl std::fmt::Display for SortMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Recently opened folders, most recent first.
    #[serde(default)]
    pub recent_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub sort_method: Option<SortMethod>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_dirs: Vec::new(),
            sort_method: Some(SortMethod::default()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

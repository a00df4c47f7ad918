// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[layout]` - Masonry column width and gap
//! - `[lightbox]` - Transition delays of the lightbox overlay
//! - `[gallery]` - Media discovery settings (sorting)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_MASONRY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_masonry::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.layout.gap = Some(16.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::layout::{GapSize, MinColumnWidth};
use crate::domain::lightbox::{TransitionDelay, TransitionTimings};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Masonry layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Minimum width of a column; the column count is `floor(width / min_column_width)`.
    #[serde(
        default = "default_min_column_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_column_width: Option<f32>,

    /// Gap between items, in layout units.
    #[serde(default = "default_gap", skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_column_width: default_min_column_width(),
            gap: default_gap(),
        }
    }
}

impl LayoutConfig {
    /// Validated minimum column width.
    #[must_use]
    pub fn min_column_width(&self) -> MinColumnWidth {
        self.min_column_width
            .map(MinColumnWidth::new)
            .unwrap_or_default()
    }

    /// Validated gap size.
    #[must_use]
    pub fn gap(&self) -> GapSize {
        self.gap.map(GapSize::new).unwrap_or_default()
    }
}

/// Lightbox transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Delay before the displayed image is swapped during navigation.
    #[serde(
        default = "default_swap_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub swap_delay_ms: Option<u64>,

    /// Delay before the overlay is hidden after a close request.
    #[serde(
        default = "default_close_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_delay_ms: Option<u64>,

    /// Duration of the overlay entrance transition.
    #[serde(
        default = "default_entrance_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub entrance_ms: Option<u64>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            swap_delay_ms: default_swap_delay_ms(),
            close_delay_ms: default_close_delay_ms(),
            entrance_ms: default_entrance_ms(),
        }
    }
}

impl LightboxConfig {
    /// Builds validated transition timings, falling back to defaults for unset values.
    #[must_use]
    pub fn timings(&self) -> TransitionTimings {
        let delay = |value: Option<u64>, fallback: u64| {
            TransitionDelay::from_millis(value.unwrap_or(fallback))
        };
        TransitionTimings {
            entrance: delay(self.entrance_ms, DEFAULT_ENTRANCE_MS),
            swap: delay(self.swap_delay_ms, DEFAULT_SWAP_DELAY_MS),
            close: delay(self.close_delay_ms, DEFAULT_CLOSE_DELAY_MS),
        }
    }
}

/// Media discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Order of items inside each container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_min_column_width() -> Option<f32> {
    Some(DEFAULT_MIN_COLUMN_WIDTH)
}

fn default_gap() -> Option<f32> {
    Some(DEFAULT_GAP)
}

fn default_swap_delay_ms() -> Option<u64> {
    Some(DEFAULT_SWAP_DELAY_MS)
}

fn default_close_delay_ms() -> Option<u64> {
    Some(DEFAULT_CLOSE_DELAY_MS)
}

fn default_entrance_ms() -> Option<u64> {
    Some(DEFAULT_ENTRANCE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Sample manifest, protected prefix size and grid layout
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config, SampleEntry};
//!
//! let (mut config, _warning) = config::load();
//! config.gallery.samples.push(SampleEntry {
//!     source: "/home/me/Pictures/lake.jpg".into(),
//!     label: Some("Lake".to_string()),
//! });
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// One image listed in the sample manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleEntry {
    /// Path of the image on disk.
    pub source: PathBuf,
    /// Caption; the gallery falls back to "Image N" when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Gallery content and layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// How many startup records survive a "clear".
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,

    /// Number of grid columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Tile height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<f32>,

    /// Images shown at startup, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<SampleEntry>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            columns: Some(DEFAULT_COLUMNS),
            thumbnail_height: Some(DEFAULT_THUMBNAIL_HEIGHT),
            samples: Vec::new(),
        }
    }
}

impl GalleryConfig {
    /// Grid columns clamped to the supported range.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_COLUMNS)
            .clamp(MIN_COLUMNS, MAX_COLUMNS)
    }

    /// Tile height clamped to the supported range.
    #[must_use]
    pub fn thumbnail_height(&self) -> f32 {
        self.thumbnail_height
            .unwrap_or(DEFAULT_THUMBNAIL_HEIGHT)
            .clamp(MIN_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_HEIGHT)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_sample_limit() -> usize {
    DEFAULT_SAMPLE_LIMIT
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
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
                    log::warn!("failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_samples() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                sample_limit: 4,
                columns: Some(5),
                thumbnail_height: Some(150.0),
                samples: vec![
                    SampleEntry {
                        source: PathBuf::from("/pictures/a.png"),
                        label: Some("Dunes".to_string()),
                    },
                    SampleEntry {
                        source: PathBuf::from("/pictures/b.jpg"),
                        label: None,
                    },
                ],
            },
        };

        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.gallery.sample_limit, DEFAULT_SAMPLE_LIMIT);
        assert!(loaded.gallery.samples.is_empty());
    }

    #[test]
    fn manifest_entries_keep_document_order() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[[gallery.samples]]
source = "one.png"

[[gallery.samples]]
source = "two.png"
label = "Second"
"#,
        )
        .expect("write");

        let loaded = load_from_path(&path).expect("load");
        let sources: Vec<_> = loaded
            .gallery
            .samples
            .iter()
            .map(|entry| entry.source.clone())
            .collect();
        assert_eq!(sources, vec![PathBuf::from("one.png"), PathBuf::from("two.png")]);
        assert_eq!(loaded.gallery.samples[1].label.as_deref(), Some("Second"));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        let err = load_from_path(&path).expect_err("theme should be rejected");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn broken_file_loads_defaults_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "this is = = not toml").expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn absent_file_loads_defaults_silently() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn layout_values_are_clamped() {
        let gallery = GalleryConfig {
            columns: Some(42),
            thumbnail_height: Some(1.0),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.columns(), MAX_COLUMNS);
        assert_eq!(gallery.thumbnail_height(), MIN_THUMBNAIL_HEIGHT);
    }
}

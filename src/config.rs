//! Startup configuration
//!
//! Read once at startup from `~/.config/previewdeck/config.json` (or a
//! `--config` override) and never written back. A missing file yields the
//! built-in defaults; every field is individually optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::window::{PixelSize, ZoomAnchor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color theme name (e.g. "default", "dark", "high-contrast")
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// URL shown in the footer link label
    #[serde(default = "default_forum_url")]
    pub forum_url: String,

    /// Client window titles to list at startup
    #[serde(default)]
    pub clients: Vec<String>,

    /// Smallest thumbnail size the width/height inputs accept
    #[serde(default = "default_min_thumbnail_size")]
    pub min_thumbnail_size: PixelSize,

    /// Largest thumbnail size the width/height inputs accept
    #[serde(default = "default_max_thumbnail_size")]
    pub max_thumbnail_size: PixelSize,

    /// Initial widget values pushed into the window on activation
    #[serde(default)]
    pub defaults: ViewDefaults,
}

/// Initial settings applied to the window during activation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDefaults {
    #[serde(default)]
    pub minimize_to_tray: bool,
    #[serde(default = "default_true")]
    pub track_client_layouts: bool,
    #[serde(default)]
    pub hide_active_client_thumbnail: bool,
    #[serde(default = "default_true")]
    pub thumbnails_always_on_top: bool,
    #[serde(default)]
    pub hide_thumbnails_on_lost_focus: bool,
    #[serde(default)]
    pub per_client_layouts: bool,
    #[serde(default = "default_true")]
    pub show_thumbnail_overlays: bool,
    #[serde(default)]
    pub show_thumbnail_frames: bool,
    #[serde(default = "default_opacity")]
    pub thumbnails_opacity: f64,
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: PixelSize,
    #[serde(default)]
    pub enable_thumbnail_zoom: bool,
    #[serde(default = "default_zoom_factor")]
    pub thumbnail_zoom_factor: i64,
    #[serde(default)]
    pub thumbnail_zoom_anchor: ZoomAnchor,
}

fn default_true() -> bool {
    true
}

fn default_theme_name() -> String {
    "default".to_string()
}

fn default_forum_url() -> String {
    "https://forum.previewdeck.dev/".to_string()
}

fn default_opacity() -> f64 {
    0.8
}

fn default_thumbnail_size() -> PixelSize {
    PixelSize::new(192, 108)
}

fn default_min_thumbnail_size() -> PixelSize {
    PixelSize::new(64, 36)
}

fn default_max_thumbnail_size() -> PixelSize {
    PixelSize::new(960, 540)
}

fn default_zoom_factor() -> i64 {
    2
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            minimize_to_tray: false,
            track_client_layouts: true,
            hide_active_client_thumbnail: false,
            thumbnails_always_on_top: true,
            hide_thumbnails_on_lost_focus: false,
            per_client_layouts: false,
            show_thumbnail_overlays: true,
            show_thumbnail_frames: false,
            thumbnails_opacity: default_opacity(),
            thumbnail_size: default_thumbnail_size(),
            enable_thumbnail_zoom: false,
            thumbnail_zoom_factor: default_zoom_factor(),
            thumbnail_zoom_anchor: ZoomAnchor::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            forum_url: default_forum_url(),
            clients: Vec::new(),
            min_thumbnail_size: default_min_thumbnail_size(),
            max_thumbnail_size: default_max_thumbnail_size(),
            defaults: ViewDefaults::default(),
        }
    }
}

impl Config {
    /// Default config file location, if a config directory exists on this
    /// platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("previewdeck").join("config.json"))
    }

    /// Load the config from the given path, or from the default location.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/previewdeck.json"))).unwrap();
        assert_eq!(config.theme, "default");
        assert!(config.clients.is_empty());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"theme": "dark", "clients": ["Alpha", "Beta"]}"#).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.clients.len(), 2);
        assert_eq!(config.min_thumbnail_size, default_min_thumbnail_size());
        assert!(config.defaults.track_client_layouts);
    }

    #[test]
    fn zoom_anchor_parses_from_lowercase() {
        let config: Config =
            serde_json::from_str(r#"{"defaults": {"thumbnail_zoom_anchor": "se"}}"#).unwrap();
        assert_eq!(config.defaults.thumbnail_zoom_anchor, ZoomAnchor::Se);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config::default();
        let text = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.forum_url, config.forum_url);
        assert_eq!(parsed.max_thumbnail_size, config.max_thumbnail_size);
    }
}

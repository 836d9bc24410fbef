use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::viewport::MapViewport;

/// Start-view override (optional section in config.toml).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StartViewConfig {
    /// Longitude of the initial map centre.
    pub lng: f64,
    /// Latitude of the initial map centre.
    pub lat: f64,
    /// Initial zoom level.
    pub zoom: f64,
}

impl From<StartViewConfig> for MapViewport {
    fn from(v: StartViewConfig) -> Self {
        MapViewport {
            lng: v.lng,
            lat: v.lat,
            zoom: v.zoom,
        }
    }
}

/// Global configuration loaded from `~/.config/vanmap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VanmapConfig {
    /// Base URL for zoning district reference pages.
    pub reference_base_url: String,
    /// Optional start view; if missing, the built-in city default is used.
    #[serde(default)]
    pub start_view: Option<StartViewConfig>,
}

impl Default for VanmapConfig {
    fn default() -> Self {
        Self {
            reference_base_url: "https://www.reillywood.com/vanmap".to_string(),
            start_view: None,
        }
    }
}

impl VanmapConfig {
    /// Start viewport after applying any configured override.
    pub fn start_viewport(&self) -> MapViewport {
        self.start_view.map(Into::into).unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vanmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VanmapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VanmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VanmapConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = VanmapConfig::default();
        assert_eq!(cfg.reference_base_url, "https://www.reillywood.com/vanmap");
        assert!(cfg.start_view.is_none());
    }

    #[test]
    fn default_start_viewport_is_city_default() {
        let cfg = VanmapConfig::default();
        assert_eq!(cfg.start_viewport(), MapViewport::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = VanmapConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: VanmapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.reference_base_url, cfg.reference_base_url);
        assert!(parsed.start_view.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            reference_base_url = "https://zoning.example.org/districts"
        "#;
        let cfg: VanmapConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.reference_base_url,
            "https://zoning.example.org/districts"
        );
        assert!(cfg.start_view.is_none());
    }

    #[test]
    fn config_toml_start_view_section() {
        let toml = r#"
            reference_base_url = "https://www.reillywood.com/vanmap"

            [start_view]
            lng = -123.1
            lat = 49.28
            zoom = 14.5
        "#;
        let cfg: VanmapConfig = toml::from_str(toml).unwrap();
        let view = cfg.start_viewport();
        assert_eq!(view.lng, -123.1);
        assert_eq!(view.lat, 49.28);
        assert_eq!(view.zoom, 14.5);
    }
}

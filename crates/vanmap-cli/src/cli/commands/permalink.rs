//! `vanmap permalink` – shareable query string for a map view.

use vanmap_core::config::VanmapConfig;
use vanmap_core::viewport::MapViewport;

/// Print a `?lat=..&lng=..&zoom=..` link fragment; coordinates not given on
/// the command line come from the configured start view.
pub fn run_permalink(cfg: &VanmapConfig, lng: Option<f64>, lat: Option<f64>, zoom: Option<f64>) {
    let start = cfg.start_viewport();
    let view = MapViewport {
        lng: lng.unwrap_or(start.lng),
        lat: lat.unwrap_or(start.lat),
        zoom: zoom.unwrap_or(start.zoom),
    };
    println!("{}", view.to_query());
}

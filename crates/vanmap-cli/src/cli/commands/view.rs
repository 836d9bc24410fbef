//! `vanmap view` – resolve the initial map view from a query string.

use vanmap_core::config::VanmapConfig;
use vanmap_core::viewport::MapViewport;

/// Resolve and print the view a query string would open at.
pub fn run_view(cfg: &VanmapConfig, query: Option<&str>) {
    let start = cfg.start_viewport();
    let view = match query {
        Some(q) => MapViewport::from_query_or(q, start),
        None => start,
    };
    println!("lng:  {}", view.lng);
    println!("lat:  {}", view.lat);
    println!("zoom: {}", view.zoom);
}

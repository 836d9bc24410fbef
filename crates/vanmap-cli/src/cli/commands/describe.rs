//! `vanmap describe` – summarize a parcel from feature properties.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use vanmap_core::config::VanmapConfig;
use vanmap_core::parcel;

pub fn run_describe(cfg: &VanmapConfig, path: &Path) -> Result<()> {
    let json =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let props = parcel::parse_feature_properties(&json)
        .with_context(|| format!("parse {}", path.display()))?;
    let summary = parcel::summarize(&props, &cfg.reference_base_url);
    println!("{}", summary);
    Ok(())
}

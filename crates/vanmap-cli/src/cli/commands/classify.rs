//! `vanmap classify` – look up zoning districts for codes.

use anyhow::Result;
use vanmap_core::config::VanmapConfig;
use vanmap_core::zoning;

/// Classify each code and print its district and reference URL.
/// An unrecognized code aborts with the classifier's error.
pub fn run_classify(cfg: &VanmapConfig, codes: &[String]) -> Result<()> {
    println!("{:<12} {:<40} {}", "CODE", "DISTRICT", "REFERENCE");
    for code in codes {
        let descriptor = zoning::classify(code)?;
        println!(
            "{:<12} {:<40} {}",
            code,
            descriptor.name,
            descriptor.reference_url(&cfg.reference_base_url)
        );
    }
    Ok(())
}

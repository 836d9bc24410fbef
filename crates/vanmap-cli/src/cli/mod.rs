//! CLI for the Vanmap parcel-zoning toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use vanmap_core::config;

use commands::{run_classify, run_describe, run_permalink, run_view};

/// Top-level CLI for the Vanmap parcel-zoning toolkit.
#[derive(Debug, Parser)]
#[command(name = "vanmap")]
#[command(about = "Vanmap: zoning lookups and map-state tools for Vancouver parcels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify zoning codes into districts with reference links.
    Classify {
        /// One or more zoning codes, e.g. RS-1 or CD-1(103).
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Summarize a parcel from a feature-properties JSON file.
    Describe {
        /// Path to the JSON file.
        path: String,
    },

    /// Resolve the initial map view from a URL query string.
    View {
        /// Query string, e.g. "?lat=49.28&lng=-123.12&zoom=14".
        query: Option<String>,
    },

    /// Print a shareable query string for a map view.
    Permalink {
        /// Longitude of the map centre.
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Latitude of the map centre.
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Zoom level.
        #[arg(long)]
        zoom: Option<f64>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Classify { codes } => run_classify(&cfg, &codes)?,
            CliCommand::Describe { path } => run_describe(&cfg, Path::new(&path))?,
            CliCommand::View { query } => run_view(&cfg, query.as_deref()),
            CliCommand::Permalink { lng, lat, zoom } => run_permalink(&cfg, lng, lat, zoom),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

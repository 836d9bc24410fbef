//! Parcel feature properties and their display summary.
//!
//! A parcel feature in the vector tileset carries a small property bag
//! (address, zoning code, lot area, year built). This module deserializes
//! that bag and builds the plain-text summary shown when a parcel is
//! selected on the map.

mod format;

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Deserializer};

use crate::zoning;

/// Square feet per square metre.
const SQ_FT_PER_SQ_M: f64 = 10.76391;

/// Property bag of a single parcel feature.
///
/// Tile encoders are loose about property types (numbers sometimes arrive
/// as strings), so the numeric fields accept both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParcelProperties {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub area_sq_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year_built: Option<i64>,
    #[serde(default)]
    pub sfh_only: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeNumber {
    Num(f64),
    Str(String),
}

fn lenient_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<MaybeNumber>::deserialize(de)?;
    Ok(value.and_then(|v| match v {
        MaybeNumber::Num(n) => Some(n),
        MaybeNumber::Str(s) => s.trim().parse().ok(),
    }))
}

fn lenient_year<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    // Year 0 is how the source data marks "unknown".
    Ok(lenient_f64(de)?.map(|y| y as i64).filter(|&y| y != 0))
}

/// Parses a feature property bag from its JSON representation.
pub fn parse_feature_properties(json: &str) -> Result<ParcelProperties> {
    let props = serde_json::from_str(json)?;
    Ok(props)
}

/// Rounds a metric lot area to whole square feet.
pub fn area_sq_ft(area_sq_m: f64) -> i64 {
    (area_sq_m * SQ_FT_PER_SQ_M).round() as i64
}

/// Display model for a selected parcel, one field per popup line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelSummary {
    pub address: String,
    /// "<district>, <code>", with "Unknown" standing in for either half.
    pub zoning_label: String,
    /// Reference page for the district; absent when the code is unrecognized.
    pub reference_url: Option<String>,
    pub area_sq_m: Option<f64>,
    pub area_sq_ft: Option<i64>,
    pub year_built: Option<i64>,
    pub single_family_only: bool,
}

/// Builds the display summary for a parcel.
///
/// An unrecognized zoning code must not take the selection handler down
/// with it: the summary degrades to an "Unknown" district with no reference
/// link, and the code is logged for follow-up.
pub fn summarize(props: &ParcelProperties, reference_base_url: &str) -> ParcelSummary {
    let code = props.zone_name.as_deref().unwrap_or("").trim();

    let district = if code.is_empty() {
        None
    } else {
        match zoning::classify(code) {
            Ok(d) => Some(d),
            Err(e) => {
                tracing::warn!("unclassified parcel zoning: {}", e);
                None
            }
        }
    };

    let zoning_label = match district {
        Some(d) => format!("{}, {}", d.name, code),
        None if !code.is_empty() => format!("Unknown, {}", code),
        None => "Unknown".to_string(),
    };

    ParcelSummary {
        address: props
            .address
            .clone()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| "(address unknown)".to_string()),
        zoning_label,
        reference_url: district.map(|d| d.reference_url(reference_base_url)),
        area_sq_m: props.area_sq_m,
        area_sq_ft: props.area_sq_m.map(area_sq_ft),
        year_built: props.year_built,
        single_family_only: props.sfh_only.unwrap_or(false),
    }
}

impl fmt::Display for ParcelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.address)?;
        match &self.reference_url {
            Some(url) => writeln!(f, "Zoning: {} ({})", self.zoning_label, url)?,
            None => writeln!(f, "Zoning: {}", self.zoning_label)?,
        }
        if let (Some(m2), Some(ft2)) = (self.area_sq_m, self.area_sq_ft) {
            writeln!(
                f,
                "Area: {} m\u{b2} ({} ft\u{b2})",
                format::format_sq_m(m2),
                format::group_thousands(ft2)
            )?;
        }
        match self.year_built {
            Some(year) => write!(f, "Built in {}", year)?,
            None => write!(f, "Built in N/A")?,
        }
        if self.single_family_only {
            write!(f, "\nSingle-family home zoning")?;
        }
        Ok(())
    }
}

//! Zoning district classification.
//!
//! Maps raw zoning codes from parcel feature properties (e.g. "RS-1",
//! "CD-1(103)") to a high-level district and a reference-page slug. The
//! district set almost never changes, so it lives in a static table here
//! instead of being duplicated into the tileset.

mod error;
mod rules;

pub use error::ZoningError;

use rules::ZONING_RULES;

/// Human-readable district info for a zoning code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoningCodeDescriptor {
    /// District label, e.g. "Commercial".
    pub name: &'static str,
    /// Lowercase identifier of the district's reference page, e.g. "commercial".
    pub category_slug: &'static str,
}

impl ZoningCodeDescriptor {
    /// Reference-page URL for this district under `base`.
    pub fn reference_url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.category_slug)
    }
}

/// Classifies a raw zoning code, case-insensitively.
///
/// Rules are checked in table order, first match wins. An unmatched code
/// yields [`ZoningError::CodeNotFound`] carrying the input as supplied.
pub fn classify(code: &str) -> Result<ZoningCodeDescriptor, ZoningError> {
    let upper = code.to_uppercase();
    ZONING_RULES
        .iter()
        .find(|r| r.pattern.matches(&upper))
        .map(|r| r.descriptor)
        .ok_or_else(|| ZoningError::CodeNotFound(code.to_string()))
}

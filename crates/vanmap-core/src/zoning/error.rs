//! Zoning lookup error type.

use thiserror::Error;

/// Error returned when a zoning code matches no classification rule.
///
/// Carries the code exactly as the caller supplied it (original casing),
/// since that is what shows up in parcel data and logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZoningError {
    #[error("zoning code '{0}' not found")]
    CodeNotFound(String),
}

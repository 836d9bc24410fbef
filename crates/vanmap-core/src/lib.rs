pub mod config;
pub mod logging;

pub mod parcel;
pub mod viewport;
pub mod zoning;

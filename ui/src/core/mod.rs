//! Platform-agnostic logic: parameters, formulas, scenario state and helpers.

pub mod branding;
pub mod format;
pub mod formula;
pub mod params;
pub mod platform;
pub mod scenario;

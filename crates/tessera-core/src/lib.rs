//! # tessera-core
//! Foundation types and schedule math for the Tessera issuance simulator.

pub mod constants;
pub mod error;
pub mod format;
pub mod params;
pub mod schedule;
pub mod traits;
pub mod types;

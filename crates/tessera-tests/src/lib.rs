//! Cross-crate invariant tests for the Tessera simulator.
//!
//! The engine's projections must match the deployed issuance contract, so
//! this crate verifies the full numeric contract (cap, additivity,
//! monotonicity, boundary exactness) across every public view, including
//! consistency between independent views of the same schedule.

pub mod helpers;

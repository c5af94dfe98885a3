//! # tessera-halving — Epoch-based halving-issuance engine.
//!
//! Deterministic, pure-function mirror of the on-chain Tessera issuance
//! model:
//! - **Epoch-crossing mint splitting**: a single raw-input conversion is
//!   split into sub-steps at each epoch boundary so every slice mints at the
//!   ratio of the epoch it lands in.
//! - **Hard supply cap**: cumulative supply never exceeds the cap; minting at
//!   the cap is a well-defined no-op, not an error.
//! - **Aggregate views**: epoch table, per-epoch traversal-time estimates,
//!   and an exact-cornered supply curve for charting.
//!
//! Every operation is a total function of its explicit inputs. There is no
//! engine state, no I/O, and no panic path for in-domain inputs.

pub mod curve;
pub mod engine;
pub mod table;

pub use engine::HalvingEngine;

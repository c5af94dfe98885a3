//! Result and row types produced by the issuance engine.
//!
//! The engine is stateless; every type here is a transient value returned to
//! the caller, never persisted by the engine itself. All types serialize with
//! serde so the CLI and web consumers can emit them as JSON.

use serde::{Deserialize, Serialize};

/// The effect of converting one raw-input amount into governance-token
/// supply, starting from a given cumulative supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MintResult {
    /// Supply actually minted; exactly `new_supply - total_supply_before`.
    pub actual_minted: f64,
    /// Cumulative supply after the mint, never above the cap.
    pub new_supply: f64,
    /// Epoch index corresponding to `new_supply`.
    pub epoch: u32,
    /// Halving ratio at `new_supply` (emission multiplier not included).
    pub ratio: f64,
}

/// Static description of one epoch's output-side characteristics,
/// independent of any raw-input rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochRow {
    pub epoch: u32,
    pub halving_ratio: f64,
    /// Supply minted within this epoch (one `EPOCH_SIZE` slice).
    pub epoch_mintable: f64,
    /// Cumulative supply at the end of this epoch, clamped to the cap.
    pub cumulative_supply: f64,
}

/// Projection of how long it takes to traverse one epoch at a constant
/// raw-input production rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochTimeEstimate {
    pub epoch: u32,
    /// Raw input required to traverse this epoch; infinity if the ratio is zero.
    pub raw_input_needed: f64,
    pub cumulative_raw_input: f64,
    pub days: f64,
    pub cumulative_days: f64,
    /// Human-readable rendering of `days`, e.g. "41.3 days".
    pub formatted_time: String,
}

/// A sampled point on the monotonic raw-input → supply curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplyCurvePoint {
    pub raw_minted: f64,
    pub total_supply: f64,
}

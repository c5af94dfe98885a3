//! Trait interfaces for the Tessera simulator.
//!
//! [`IssuanceModel`] is the contract between the engine crate and its
//! consumers (CLI, web bindings, tests): a pure, stateless view of one
//! issuance schedule. Implemented for production by
//! `tessera_halving::HalvingEngine`; [`FlatIssuance`] is a degenerate
//! reference model used to sanity-check sub-stepping logic.

use crate::types::{EpochRow, EpochTimeEstimate, MintResult, SupplyCurvePoint};

/// Pure computation over one issuance schedule.
///
/// Every method is a total function of its explicit inputs: no hidden state,
/// no I/O, no failure modes. Out-of-domain numeric inputs are clamped, never
/// rejected, since these calls sit directly in UI render paths.
pub trait IssuanceModel {
    /// Convert `raw_amount` of raw input into minted supply starting from
    /// `total_supply_before`, splitting across epoch boundaries as needed.
    ///
    /// `emission_ratio` in `[0, 1]` is an independent efficiency multiplier
    /// applied on top of the halving ratio.
    fn simulate_mint(
        &self,
        total_supply_before: f64,
        raw_amount: f64,
        emission_ratio: f64,
    ) -> MintResult;

    /// One row per epoch from zero supply to the cap.
    fn epoch_table(&self) -> Vec<EpochRow>;

    /// Per-epoch traversal-time projections at a constant raw-input
    /// production rate. Empty for non-positive rate or unit duration.
    fn epoch_time_estimates(&self, rate_per_unit: f64, unit_secs: f64) -> Vec<EpochTimeEstimate>;

    /// Sampled raw-input → supply curve with exact epoch corners.
    ///
    /// A non-positive or non-finite `raw_step` selects the default step size.
    fn supply_curve(&self, raw_step: f64) -> Vec<SupplyCurvePoint>;

    /// Raw input required to move cumulative supply from `from_supply` to
    /// `target_supply` (inverse of [`simulate_mint`](Self::simulate_mint)).
    ///
    /// Infinite when `emission_ratio` is zero and there is ground to cover.
    fn raw_input_for(&self, from_supply: f64, target_supply: f64, emission_ratio: f64) -> f64;
}

/// Reference model with no halving: ratio 1.0 everywhere, same hard cap.
///
/// One raw-input unit always mints one supply unit (times the emission
/// multiplier) until the cap. Against this, the production engine with
/// `decay_rate = 1.0` must agree exactly.
#[derive(Debug, Clone, Copy)]
pub struct FlatIssuance {
    pub max_supply: f64,
}

impl IssuanceModel for FlatIssuance {
    fn simulate_mint(
        &self,
        total_supply_before: f64,
        raw_amount: f64,
        emission_ratio: f64,
    ) -> MintResult {
        let start = total_supply_before.clamp(0.0, self.max_supply);
        let emission = if emission_ratio.is_finite() {
            emission_ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let raw = if raw_amount.is_finite() {
            raw_amount.max(0.0)
        } else {
            0.0
        };
        let new_supply = (start + raw * emission).min(self.max_supply);
        MintResult {
            actual_minted: new_supply - start,
            new_supply,
            epoch: 0,
            ratio: 1.0,
        }
    }

    fn epoch_table(&self) -> Vec<EpochRow> {
        vec![EpochRow {
            epoch: 0,
            halving_ratio: 1.0,
            epoch_mintable: self.max_supply,
            cumulative_supply: self.max_supply,
        }]
    }

    fn epoch_time_estimates(&self, rate_per_unit: f64, unit_secs: f64) -> Vec<EpochTimeEstimate> {
        if !(rate_per_unit > 0.0) || !(unit_secs > 0.0) {
            return Vec::new();
        }
        let days = self.max_supply / rate_per_unit * unit_secs / crate::constants::SECONDS_PER_DAY;
        vec![EpochTimeEstimate {
            epoch: 0,
            raw_input_needed: self.max_supply,
            cumulative_raw_input: self.max_supply,
            days,
            cumulative_days: days,
            formatted_time: crate::format::format_days(days),
        }]
    }

    fn supply_curve(&self, _raw_step: f64) -> Vec<SupplyCurvePoint> {
        vec![
            SupplyCurvePoint {
                raw_minted: 0.0,
                total_supply: 0.0,
            },
            SupplyCurvePoint {
                raw_minted: self.max_supply,
                total_supply: self.max_supply,
            },
        ]
    }

    fn raw_input_for(&self, from_supply: f64, target_supply: f64, emission_ratio: f64) -> f64 {
        let from = from_supply.clamp(0.0, self.max_supply);
        let target = target_supply.clamp(0.0, self.max_supply);
        if target <= from {
            return 0.0;
        }
        let emission = emission_ratio.clamp(0.0, 1.0);
        if emission <= 0.0 {
            return f64::INFINITY;
        }
        (target - from) / emission
    }
}

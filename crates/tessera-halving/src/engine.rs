//! The halving engine implementing the [`IssuanceModel`] trait.
//!
//! Mint conversion is the delicate part: the halving ratio changes at each
//! epoch boundary, and one raw-input amount may cross several boundaries, so
//! the conversion is split into per-epoch sub-steps. Each sub-step fills the
//! supply "room" up to the nearer of the next boundary or the cap, at the
//! effective ratio `halving_ratio(epoch) * emission_ratio`, then advances.
//!
//! The sub-stepping loop carries an explicit iteration cap
//! ([`ScheduleParams::max_mint_steps`]); exceeding it is a logic error
//! (debug assertion plus hard break), never a silent spin.

use tessera_core::params::ScheduleParams;
use tessera_core::traits::IssuanceModel;
use tessera_core::types::{EpochRow, EpochTimeEstimate, MintResult, SupplyCurvePoint};
use tracing::{trace, warn};

/// The production issuance engine.
///
/// Holds only the schedule parameters; all computation is pure. The default
/// engine uses the canonical on-chain schedule and agrees exactly with the
/// free functions in [`tessera_core::schedule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HalvingEngine {
    params: ScheduleParams,
}

impl HalvingEngine {
    /// Engine over the canonical on-chain schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over a custom (already validated) schedule.
    pub fn with_params(params: ScheduleParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScheduleParams {
        &self.params
    }

    /// Which epoch a cumulative supply falls in, clamped to
    /// `[0, max_epochs]`. Negative or non-finite supply clamps to epoch 0.
    pub fn epoch_of(&self, total_supply: f64) -> u32 {
        if !(total_supply > 0.0) {
            return 0;
        }
        let epoch = (total_supply / self.params.epoch_size).floor();
        if epoch >= self.params.max_epochs as f64 {
            self.params.max_epochs
        } else {
            epoch as u32
        }
    }

    /// Halving ratio for an epoch: `decay_rate^min(epoch, max_epochs)`.
    pub fn halving_ratio(&self, epoch: u32) -> f64 {
        self.params
            .decay_rate
            .powi(epoch.min(self.params.max_epochs) as i32)
    }

    /// Cumulative supply at which `epoch` ends, clamped to the cap.
    pub fn epoch_boundary(&self, epoch: u32) -> f64 {
        ((epoch as f64 + 1.0) * self.params.epoch_size).min(self.params.max_supply)
    }

    /// Convert raw input into minted supply, splitting at epoch boundaries.
    ///
    /// See the module docs for the sub-stepping scheme. Termination: each
    /// iteration either exhausts the remaining raw input or lands the supply
    /// exactly on the next epoch boundary, so the loop runs at most once per
    /// boundary plus one final partial step.
    pub fn simulate_mint(
        &self,
        total_supply_before: f64,
        raw_amount: f64,
        emission_ratio: f64,
    ) -> MintResult {
        let max_supply = self.params.max_supply;
        let start = if total_supply_before.is_finite() {
            total_supply_before.clamp(0.0, max_supply)
        } else {
            0.0
        };
        let emission = if emission_ratio.is_finite() {
            emission_ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let mut remaining = if raw_amount.is_finite() {
            raw_amount.max(0.0)
        } else {
            0.0
        };

        let step_cap = self.params.max_mint_steps();
        let mut supply = start;
        let mut steps = 0u32;

        while remaining > 0.0 && supply < max_supply {
            steps += 1;
            if steps > step_cap {
                debug_assert!(false, "mint sub-stepping exceeded {step_cap} iterations");
                warn!(
                    supply,
                    remaining, step_cap, "mint sub-stepping exceeded iteration cap; truncating"
                );
                break;
            }

            let epoch = self.epoch_of(supply);
            let effective = self.halving_ratio(epoch) * emission;
            if effective <= 0.0 {
                // Zero-progress configuration (emission ratio 0): the room
                // would need infinite raw input, so stop rather than spin.
                break;
            }

            let boundary = self.epoch_boundary(epoch);
            let room = boundary - supply;
            let raw_needed = room / effective;

            if remaining >= raw_needed {
                // Fill the epoch exactly; landing on the boundary keeps the
                // epoch index advancing despite float rounding.
                supply = boundary;
                remaining -= raw_needed;
            } else {
                supply += remaining * effective;
                remaining = 0.0;
            }
            trace!(epoch, supply, remaining, "mint sub-step");
        }

        let new_supply = supply.min(max_supply);
        let epoch = self.epoch_of(new_supply);
        MintResult {
            actual_minted: new_supply - start,
            new_supply,
            epoch,
            ratio: self.halving_ratio(epoch),
        }
    }
}

impl IssuanceModel for HalvingEngine {
    fn simulate_mint(
        &self,
        total_supply_before: f64,
        raw_amount: f64,
        emission_ratio: f64,
    ) -> MintResult {
        HalvingEngine::simulate_mint(self, total_supply_before, raw_amount, emission_ratio)
    }

    fn epoch_table(&self) -> Vec<EpochRow> {
        HalvingEngine::epoch_table(self)
    }

    fn epoch_time_estimates(&self, rate_per_unit: f64, unit_secs: f64) -> Vec<EpochTimeEstimate> {
        HalvingEngine::epoch_time_estimates(self, rate_per_unit, unit_secs)
    }

    fn supply_curve(&self, raw_step: f64) -> Vec<SupplyCurvePoint> {
        HalvingEngine::supply_curve(self, raw_step)
    }

    fn raw_input_for(&self, from_supply: f64, target_supply: f64, emission_ratio: f64) -> f64 {
        HalvingEngine::raw_input_for(self, from_supply, target_supply, emission_ratio)
    }
}

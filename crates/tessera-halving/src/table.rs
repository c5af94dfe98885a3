//! Epoch table and traversal-time estimates.
//!
//! Both views are finite, restartable, pure sequences recomputable from the
//! schedule alone — suitable for memoization by callers since they depend on
//! no mutable state.

use tessera_core::constants::SECONDS_PER_DAY;
use tessera_core::format::format_days;
use tessera_core::types::{EpochRow, EpochTimeEstimate};

use crate::engine::HalvingEngine;

impl HalvingEngine {
    /// One row per epoch from zero supply to the cap.
    ///
    /// Each epoch corresponds to exactly one epoch-size slice of cumulative
    /// supply regardless of ratio, so `epoch_mintable` is constant except for
    /// a possible shorter final slice when the cap is not an exact multiple
    /// of the epoch size (never the case on-chain).
    pub fn epoch_table(&self) -> Vec<EpochRow> {
        let mut rows = Vec::with_capacity(self.params().max_epochs as usize);
        let mut cumulative = 0.0f64;
        for epoch in 0..self.params().max_epochs {
            let next = self.epoch_boundary(epoch);
            rows.push(EpochRow {
                epoch,
                halving_ratio: self.halving_ratio(epoch),
                epoch_mintable: next - cumulative,
                cumulative_supply: next,
            });
            cumulative = next;
            if cumulative >= self.params().max_supply {
                break;
            }
        }
        rows
    }

    /// Per-epoch traversal-time projections at a constant raw-input
    /// production rate.
    ///
    /// `rate_per_unit` is raw input produced per time unit (e.g. per block),
    /// `unit_secs` the duration of that unit. Traversing epoch `e` needs
    /// `epoch_size / halving_ratio(e)` raw input; a zero ratio would need
    /// infinite input and is reported as the infinity sentinel, not an error.
    /// Non-positive rate or unit yields an empty sequence.
    pub fn epoch_time_estimates(
        &self,
        rate_per_unit: f64,
        unit_secs: f64,
    ) -> Vec<EpochTimeEstimate> {
        if !(rate_per_unit > 0.0)
            || !(unit_secs > 0.0)
            || !rate_per_unit.is_finite()
            || !unit_secs.is_finite()
        {
            return Vec::new();
        }

        let mut estimates = Vec::with_capacity(self.params().max_epochs as usize);
        let mut cumulative_raw = 0.0f64;
        let mut cumulative_days = 0.0f64;
        let mut start = 0.0f64;

        for epoch in 0..self.params().max_epochs {
            let room = self.epoch_boundary(epoch) - start;
            let ratio = self.halving_ratio(epoch);
            let raw_needed = if ratio > 0.0 {
                room / ratio
            } else {
                f64::INFINITY
            };
            cumulative_raw += raw_needed;
            let days = raw_needed / rate_per_unit * unit_secs / SECONDS_PER_DAY;
            cumulative_days += days;
            estimates.push(EpochTimeEstimate {
                epoch,
                raw_input_needed: raw_needed,
                cumulative_raw_input: cumulative_raw,
                days,
                cumulative_days,
                formatted_time: format_days(days),
            });
            start += room;
            if start >= self.params().max_supply {
                break;
            }
        }
        estimates
    }
}

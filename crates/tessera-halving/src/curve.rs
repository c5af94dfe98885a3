//! Supply-curve sampling and inverse raw-input computations.
//!
//! The raw-input → supply curve is piecewise linear with a corner at every
//! epoch boundary. Sampling advances in fixed raw-input steps but always
//! lands a point exactly on each corner crossed, so charts show the true
//! kinks instead of interpolating across them.

use tessera_core::constants::{DEFAULT_CURVE_SAMPLES, MAX_CURVE_POINTS};
use tessera_core::types::SupplyCurvePoint;
use tracing::warn;

use crate::engine::HalvingEngine;

impl HalvingEngine {
    /// Total raw input needed to mint from zero supply to the cap at full
    /// emission. Finite for any valid schedule (the ratio floor is positive).
    pub fn raw_input_to_cap(&self) -> f64 {
        self.raw_input_for(0.0, self.params().max_supply, 1.0)
    }

    /// Raw input required to move cumulative supply from `from_supply` to
    /// `target_supply` — the inverse of
    /// [`simulate_mint`](HalvingEngine::simulate_mint).
    ///
    /// Both supplies clamp to `[0, max_supply]`; a target at or below the
    /// start needs nothing. With a zero emission ratio any positive distance
    /// is unreachable, reported as infinity rather than an error.
    pub fn raw_input_for(&self, from_supply: f64, target_supply: f64, emission_ratio: f64) -> f64 {
        let max_supply = self.params().max_supply;
        let from = if from_supply.is_finite() {
            from_supply.clamp(0.0, max_supply)
        } else {
            0.0
        };
        let target = if target_supply.is_finite() {
            target_supply.clamp(0.0, max_supply)
        } else {
            max_supply
        };
        if target <= from {
            return 0.0;
        }
        let emission = if emission_ratio.is_finite() {
            emission_ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if emission <= 0.0 {
            return f64::INFINITY;
        }

        let mut raw = 0.0f64;
        let mut supply = from;
        while supply < target {
            let epoch = self.epoch_of(supply);
            let boundary = self.epoch_boundary(epoch).min(target);
            raw += (boundary - supply) / (self.halving_ratio(epoch) * emission);
            supply = boundary;
        }
        raw
    }

    /// Sampled raw-input → supply curve.
    ///
    /// Advances in `raw_step` raw-input increments, sub-stepping within each
    /// increment to land exactly on every epoch boundary crossed (the same
    /// splitting scheme as `simulate_mint` with emission ratio 1). The first
    /// point is the origin; the final point's supply equals the cap exactly.
    ///
    /// A non-positive or non-finite `raw_step` falls back to the default
    /// resolution of [`DEFAULT_CURVE_SAMPLES`] steps to the cap.
    pub fn supply_curve(&self, raw_step: f64) -> Vec<SupplyCurvePoint> {
        let max_supply = self.params().max_supply;
        let step = if raw_step.is_finite() && raw_step > 0.0 {
            raw_step
        } else {
            if raw_step != 0.0 {
                warn!(raw_step, "invalid curve step; using default resolution");
            }
            self.raw_input_to_cap() / DEFAULT_CURVE_SAMPLES as f64
        };

        let mut points = vec![SupplyCurvePoint {
            raw_minted: 0.0,
            total_supply: 0.0,
        }];
        let mut raw = 0.0f64;
        let mut supply = 0.0f64;

        while supply < max_supply {
            if points.len() >= MAX_CURVE_POINTS {
                // A degenerate step size would otherwise make the curve
                // unbounded; close the curve at the cap and stop.
                warn!(step, "curve point cap reached; closing curve at the cap");
                raw += self.raw_input_for(supply, max_supply, 1.0);
                supply = max_supply;
                points.push(SupplyCurvePoint {
                    raw_minted: raw,
                    total_supply: supply,
                });
                break;
            }
            let mut remaining = step;
            while remaining > 0.0 && supply < max_supply {
                let epoch = self.epoch_of(supply);
                let ratio = self.halving_ratio(epoch);
                let boundary = self.epoch_boundary(epoch);
                let raw_needed = (boundary - supply) / ratio;

                if remaining >= raw_needed {
                    // Land exactly on the epoch corner.
                    raw += raw_needed;
                    remaining -= raw_needed;
                    supply = boundary;
                } else {
                    raw += remaining;
                    supply += remaining * ratio;
                    remaining = 0.0;
                }
                points.push(SupplyCurvePoint {
                    raw_minted: raw,
                    total_supply: supply.min(max_supply),
                });
            }
        }
        points
    }
}

//! Halving schedule math over the canonical issuance constants.
//!
//! The issuance ratio decays by [`DECAY_RATE`](crate::constants::DECAY_RATE)
//! at each epoch boundary, where an epoch is a fixed
//! [`EPOCH_SIZE`](crate::constants::EPOCH_SIZE) slice of cumulative *output*
//! supply:
//!
//! - Epoch 0 (supply 0–4,999,999): ratio 1.0
//! - Epoch 1 (supply 5,000,000–9,999,999): ratio 0.75
//! - …
//! - Epoch 19 (supply 95,000,000–99,999,999): ratio 0.75¹⁹
//! - Epoch 20: reached exactly at the 100,000,000 cap; the ratio floor
//!   (0.75²⁰) holds for any epoch index at or beyond it.
//!
//! All functions are total: out-of-domain inputs (negative supply, NaN) are
//! clamped to the nearest valid boundary, never surfaced as errors. This code
//! sits directly in UI render paths and must never panic.
//!
//! Parameterized variants of the same math live on
//! `tessera_halving::HalvingEngine`; the free functions here are the
//! canonical schedule that mirrors the deployed contract.

use crate::constants::{DECAY_RATE, EPOCH_SIZE, MAX_EPOCHS, MAX_SUPPLY};

/// Which issuance epoch a cumulative supply falls in.
///
/// `floor(supply / EPOCH_SIZE)`, clamped to `[0, MAX_EPOCHS]`. Negative or
/// non-finite supply clamps to epoch 0.
pub fn epoch_of(total_supply: f64) -> u32 {
    if !(total_supply > 0.0) {
        return 0;
    }
    let epoch = (total_supply / EPOCH_SIZE).floor();
    if epoch >= MAX_EPOCHS as f64 {
        MAX_EPOCHS
    } else {
        epoch as u32
    }
}

/// The halving ratio for a given epoch index.
///
/// `DECAY_RATE^min(epoch, MAX_EPOCHS)`; constant for `epoch >= MAX_EPOCHS`.
/// Result is in `(0, 1]`.
pub fn halving_ratio(epoch: u32) -> f64 {
    DECAY_RATE.powi(epoch.min(MAX_EPOCHS) as i32)
}

/// The cumulative supply at which a given epoch ends, clamped to the cap.
pub fn epoch_boundary(epoch: u32) -> f64 {
    ((epoch as f64 + 1.0) * EPOCH_SIZE).min(MAX_SUPPLY)
}

/// Supply still mintable before the cap is reached.
pub fn remaining_mintable(total_supply: f64) -> f64 {
    (MAX_SUPPLY - total_supply.clamp(0.0, MAX_SUPPLY)).max(0.0)
}

/// Fraction of the current epoch already minted, in `[0, 1]`.
///
/// At or beyond the cap the final epoch counts as complete.
pub fn epoch_progress(total_supply: f64) -> f64 {
    let supply = total_supply.clamp(0.0, MAX_SUPPLY);
    if supply >= MAX_SUPPLY {
        return 1.0;
    }
    let epoch_start = epoch_of(supply) as f64 * EPOCH_SIZE;
    (supply - epoch_start) / EPOCH_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------
    // epoch_of
    // ------------------------------------------------------------------

    #[test]
    fn epoch_of_zero_supply() {
        assert_eq!(epoch_of(0.0), 0);
    }

    #[test]
    fn epoch_of_just_below_first_boundary() {
        assert_eq!(epoch_of(EPOCH_SIZE - 1.0), 0);
    }

    #[test]
    fn epoch_of_first_boundary() {
        assert_eq!(epoch_of(EPOCH_SIZE), 1);
    }

    #[test]
    fn epoch_of_mid_second_epoch() {
        assert_eq!(epoch_of(EPOCH_SIZE + 2_000_000.0), 1);
    }

    #[test]
    fn epoch_of_cap_is_clamped() {
        assert_eq!(epoch_of(MAX_SUPPLY), MAX_EPOCHS);
    }

    #[test]
    fn epoch_of_beyond_cap_stays_clamped() {
        assert_eq!(epoch_of(MAX_SUPPLY * 10.0), MAX_EPOCHS);
    }

    #[test]
    fn epoch_of_negative_clamps_to_zero() {
        assert_eq!(epoch_of(-1.0), 0);
    }

    #[test]
    fn epoch_of_nan_clamps_to_zero() {
        assert_eq!(epoch_of(f64::NAN), 0);
    }

    // ------------------------------------------------------------------
    // halving_ratio
    // ------------------------------------------------------------------

    #[test]
    fn ratio_epoch_zero_is_one() {
        assert_eq!(halving_ratio(0), 1.0);
    }

    #[test]
    fn ratio_epoch_one() {
        assert_eq!(halving_ratio(1), 0.75);
    }

    #[test]
    fn ratio_epoch_two() {
        assert_eq!(halving_ratio(2), 0.5625);
    }

    #[test]
    fn ratio_flat_beyond_max_epochs() {
        assert_eq!(halving_ratio(MAX_EPOCHS), halving_ratio(MAX_EPOCHS + 5));
    }

    #[test]
    fn ratio_strictly_decreasing_until_floor() {
        let mut prev = halving_ratio(0);
        for e in 1..=MAX_EPOCHS {
            let r = halving_ratio(e);
            assert!(r < prev, "epoch {e} ratio not less than epoch {}", e - 1);
            prev = r;
        }
    }

    // ------------------------------------------------------------------
    // epoch_boundary
    // ------------------------------------------------------------------

    #[test]
    fn boundary_of_epoch_zero() {
        assert_eq!(epoch_boundary(0), EPOCH_SIZE);
    }

    #[test]
    fn boundary_of_last_epoch_is_cap() {
        assert_eq!(epoch_boundary(MAX_EPOCHS - 1), MAX_SUPPLY);
    }

    #[test]
    fn boundary_clamped_past_cap() {
        assert_eq!(epoch_boundary(MAX_EPOCHS + 7), MAX_SUPPLY);
    }

    #[test]
    fn boundary_strictly_above_any_supply_in_epoch() {
        for supply in [0.0, 1.0, EPOCH_SIZE, EPOCH_SIZE * 3.5, MAX_SUPPLY - 1.0] {
            assert!(epoch_boundary(epoch_of(supply)) > supply, "supply {supply}");
        }
    }

    // ------------------------------------------------------------------
    // remaining_mintable / epoch_progress
    // ------------------------------------------------------------------

    #[test]
    fn remaining_from_zero_is_cap() {
        assert_eq!(remaining_mintable(0.0), MAX_SUPPLY);
    }

    #[test]
    fn remaining_at_cap_is_zero() {
        assert_eq!(remaining_mintable(MAX_SUPPLY), 0.0);
        assert_eq!(remaining_mintable(MAX_SUPPLY + 1.0), 0.0);
    }

    #[test]
    fn remaining_negative_supply_clamps() {
        assert_eq!(remaining_mintable(-500.0), MAX_SUPPLY);
    }

    #[test]
    fn progress_at_epoch_start_is_zero() {
        assert_eq!(epoch_progress(0.0), 0.0);
        assert_eq!(epoch_progress(EPOCH_SIZE), 0.0);
    }

    #[test]
    fn progress_at_midpoint() {
        assert_eq!(epoch_progress(EPOCH_SIZE / 2.0), 0.5);
    }

    #[test]
    fn progress_at_cap_is_complete() {
        assert_eq!(epoch_progress(MAX_SUPPLY), 1.0);
    }

    // ------------------------------------------------------------------
    // proptest
    // ------------------------------------------------------------------

    proptest! {
        #[test]
        fn epoch_of_nondecreasing(a in 0.0..MAX_SUPPLY, b in 0.0..MAX_SUPPLY) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(epoch_of(lo) <= epoch_of(hi));
        }

        #[test]
        fn ratio_monotone_nonincreasing(e1 in 0u32..64, e2 in 0u32..64) {
            let (lo, hi) = if e1 <= e2 { (e1, e2) } else { (e2, e1) };
            prop_assert!(halving_ratio(lo) >= halving_ratio(hi));
        }

        #[test]
        fn ratio_in_unit_interval(e in 0u32..1000) {
            let r = halving_ratio(e);
            prop_assert!(r > 0.0 && r <= 1.0);
        }

        #[test]
        fn progress_in_unit_interval(supply in -1e9..2e8) {
            let p = epoch_progress(supply);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}

//! End-to-end invariant suite for the Tessera issuance engine.
//!
//! Exercises the whole public surface against the numeric contract the
//! on-chain issuance logic enforces: the hard cap, exact boundary
//! accounting, ratio decay with a floor, and agreement between the mint
//! function and every derived view (table, curve, estimates, inverse).

use proptest::prelude::*;
use tessera_core::constants::{EPOCH_SIZE, MAX_EPOCHS, MAX_SUPPLY, MINT_TOLERANCE};
use tessera_core::schedule::{epoch_of, halving_ratio};
use tessera_core::traits::IssuanceModel;
use tessera_tests::helpers::{close, engine, mint_in_parts};

// ----------------------------------------------------------------------
// Concrete scenarios pinned to the contract's constants
// ----------------------------------------------------------------------

#[test]
fn epoch_indices_at_known_supplies() {
    assert_eq!(epoch_of(0.0), 0);
    assert_eq!(epoch_of(5_000_000.0), 1);
    assert_eq!(epoch_of(100_000_000.0), 20);
}

#[test]
fn ratios_at_known_epochs() {
    assert_eq!(halving_ratio(0), 1.0);
    assert_eq!(halving_ratio(1), 0.75);
    assert_eq!(halving_ratio(2), 0.5625);
}

#[test]
fn full_first_epoch_mints_one_for_one() {
    let result = engine().simulate_mint(0.0, 5_000_000.0, 1.0);
    assert_eq!(result.actual_minted, 5_000_000.0);
    assert_eq!(result.new_supply, 5_000_000.0);
    assert_eq!(result.epoch, 1);
}

#[test]
fn boundary_crossing_mints_at_reduced_ratio() {
    let result = engine().simulate_mint(4_000_000.0, 2_000_000.0, 1.0);
    assert!(result.actual_minted < 2_000_000.0);
}

// ----------------------------------------------------------------------
// Views agree with each other
// ----------------------------------------------------------------------

#[test]
fn table_matches_minting_epoch_by_epoch() {
    // Mint each epoch's required raw input in sequence; the supply after
    // each step must match the table's cumulative column.
    let e = engine();
    let rows = e.epoch_table();
    let mut supply = 0.0;
    for row in &rows {
        let raw = e.raw_input_for(supply, row.cumulative_supply, 1.0);
        supply = e.simulate_mint(supply, raw, 1.0).new_supply;
        assert!(
            close(supply, row.cumulative_supply),
            "epoch {}: {} != {}",
            row.epoch,
            supply,
            row.cumulative_supply
        );
    }
    assert!(close(supply, MAX_SUPPLY));
}

#[test]
fn estimates_agree_with_table_ratios() {
    let e = engine();
    let rows = e.epoch_table();
    let estimates = e.epoch_time_estimates(1_000.0, 12.0);
    assert_eq!(rows.len(), estimates.len());
    for (row, est) in rows.iter().zip(&estimates) {
        assert!(close(est.raw_input_needed, EPOCH_SIZE / row.halving_ratio));
    }
}

#[test]
fn curve_endpoint_equals_inverse_total() {
    let e = engine();
    let points = e.supply_curve(0.0);
    let last = points.last().unwrap();
    assert_eq!(last.total_supply, MAX_SUPPLY);
    assert!(close(last.raw_minted, e.raw_input_to_cap()));
}

#[test]
fn trait_object_exposes_full_surface() {
    let e = engine();
    let model: &dyn IssuanceModel = &e;
    assert_eq!(model.epoch_table().len(), MAX_EPOCHS as usize);
    assert_eq!(model.simulate_mint(0.0, 0.0, 1.0).actual_minted, 0.0);
    assert!(model.raw_input_for(0.0, MAX_SUPPLY, 1.0).is_finite());
    assert_eq!(
        model.supply_curve(0.0).last().unwrap().total_supply,
        MAX_SUPPLY
    );
}

// ----------------------------------------------------------------------
// Splitting consistency beyond two-way splits
// ----------------------------------------------------------------------

#[test]
fn many_small_mints_match_one_large_mint() {
    let e = engine();
    let raw = 40_000_000.0; // crosses several boundaries
    let whole = e.simulate_mint(0.0, raw, 1.0).new_supply;
    for parts in [2, 7, 100, 1000] {
        let split = mint_in_parts(&e, 0.0, raw, parts);
        assert!(
            close(whole, split),
            "{parts} parts: {split} != {whole}"
        );
    }
}

// ----------------------------------------------------------------------
// Property suite
// ----------------------------------------------------------------------

proptest! {
    #[test]
    fn cap_holds_for_all_inputs(
        supply in 0.0..=MAX_SUPPLY,
        raw in 0.0..1e12,
        emission in 0.0..=1.0,
    ) {
        let result = engine().simulate_mint(supply, raw, emission);
        prop_assert!(result.new_supply <= MAX_SUPPLY);
        prop_assert_eq!(result.actual_minted, result.new_supply - supply);
    }

    #[test]
    fn two_way_split_additivity(
        supply in 0.0..MAX_SUPPLY,
        raw in 0.0..1e10,
    ) {
        let e = engine();
        let whole = e.simulate_mint(supply, raw, 1.0).new_supply;
        let split = mint_in_parts(&e, supply, raw, 2);
        let scale = whole.abs().max(1.0);
        prop_assert!(
            (whole - split).abs() / scale < MINT_TOLERANCE,
            "whole {} vs split {}",
            whole,
            split,
        );
    }

    #[test]
    fn inverse_roundtrip(
        from in 0.0..MAX_SUPPLY,
        target in 0.0..=MAX_SUPPLY,
        emission in 0.05..=1.0,
    ) {
        let e = engine();
        let raw = e.raw_input_for(from, target, emission);
        prop_assert!(raw.is_finite());
        let result = e.simulate_mint(from, raw, emission);
        let expected = target.max(from.min(MAX_SUPPLY));
        let scale = expected.abs().max(1.0);
        prop_assert!(
            (result.new_supply - expected).abs() / scale < MINT_TOLERANCE,
            "from {} target {}: reached {}",
            from,
            target,
            result.new_supply,
        );
    }

    #[test]
    fn minting_never_decreases_supply(
        supply in 0.0..=MAX_SUPPLY,
        raw in 0.0..1e12,
        emission in 0.0..=1.0,
    ) {
        let result = engine().simulate_mint(supply, raw, emission);
        prop_assert!(result.new_supply >= supply.min(MAX_SUPPLY));
    }
}

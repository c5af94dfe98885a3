//! Shared test helpers for the invariant suites.

use tessera_core::constants::MINT_TOLERANCE;
use tessera_halving::HalvingEngine;

/// Engine over the canonical on-chain schedule.
pub fn engine() -> HalvingEngine {
    HalvingEngine::new()
}

/// Relative closeness within the simulator's mint tolerance.
pub fn close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() / scale < MINT_TOLERANCE
}

/// Mint `raw` in `parts` equal sequential slices, returning the final supply.
pub fn mint_in_parts(engine: &HalvingEngine, start: f64, raw: f64, parts: u32) -> f64 {
    let slice = raw / parts as f64;
    let mut supply = start;
    for _ in 0..parts {
        supply = engine.simulate_mint(supply, slice, 1.0).new_supply;
    }
    supply
}

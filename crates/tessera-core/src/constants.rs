//! Issuance-model constants. All amounts in whole TESS tokens.
//!
//! These values mirror the deployed Tessera issuance contract exactly. The
//! simulator is only useful while its projections match real contract
//! behaviour, so changing any of them is a consensus-level decision, not a
//! display tweak.

/// Hard cap on cumulative minted governance-token supply.
pub const MAX_SUPPLY: f64 = 100_000_000.0;

/// Width of one issuance epoch, in cumulative *output* supply.
///
/// Epoch boundaries are defined by minted supply, not by raw input consumed:
/// epoch `e` spans supplies `[e * EPOCH_SIZE, (e + 1) * EPOCH_SIZE)`.
pub const EPOCH_SIZE: f64 = 5_000_000.0;

/// Multiplicative ratio applied to the issuance rate at each successive epoch.
///
/// Each epoch mints at 75% of the previous epoch's rate for the same raw input.
pub const DECAY_RATE: f64 = 0.75;

/// Number of epochs before the ratio floor is reached and held constant.
///
/// Beyond this the ratio stays pinned at `DECAY_RATE^MAX_EPOCHS`. With the
/// current constants the cap is reached exactly at epoch `MAX_EPOCHS`
/// (`MAX_SUPPLY == MAX_EPOCHS * EPOCH_SIZE`), so the floor only matters for
/// the clamped epoch index reported at the cap.
pub const MAX_EPOCHS: u32 = 20;

/// Hard bound on mint sub-stepping iterations with the canonical constants.
///
/// One possible partial step per epoch boundary crossed, plus a final step.
/// Exceeding it is a logic error, not a recoverable condition.
pub const MAX_MINT_STEPS: u32 = MAX_EPOCHS + 2;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Default sample count for supply-curve generation.
///
/// The default raw-input step is the total raw input to the cap divided by
/// this count; epoch corners are always captured exactly on top of it.
pub const DEFAULT_CURVE_SAMPLES: u32 = 200;

/// Hard bound on supply-curve length, guarding against degenerate step sizes.
pub const MAX_CURVE_POINTS: usize = 100_000;

/// Relative tolerance within which split mints must agree with one large mint.
pub const MINT_TOLERANCE: f64 = 1e-6;

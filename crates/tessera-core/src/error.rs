//! Error types for the Tessera simulator.
//!
//! The engine's numeric operations are total over their documented domains
//! and never return errors; only schedule-parameter construction can fail.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("max supply must be positive and finite: {0}")] InvalidMaxSupply(f64),
    #[error("epoch size must be positive and finite: {0}")] InvalidEpochSize(f64),
    #[error("epoch size {epoch_size} exceeds max supply {max_supply}")] EpochSizeExceedsSupply { epoch_size: f64, max_supply: f64 },
    #[error("decay rate must be in (0, 1]: {0}")] InvalidDecayRate(f64),
    #[error("max epochs must be at least 1")] ZeroEpochs,
}

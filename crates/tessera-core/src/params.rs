//! Schedule parameters for parameterized simulation runs.
//!
//! The canonical constants in [`constants`](crate::constants) mirror the
//! deployed contract; `ScheduleParams` lets the sandbox environment preview
//! alternative schedules without touching them. `Default` is the canonical
//! schedule.

use crate::constants::{DECAY_RATE, EPOCH_SIZE, MAX_EPOCHS, MAX_SUPPLY};
use crate::error::ParamError;

/// Parameters of one issuance schedule.
///
/// Construct via [`ScheduleParams::new`] to get validation, or use
/// `ScheduleParams::default()` for the on-chain schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleParams {
    pub max_supply: f64,
    pub epoch_size: f64,
    pub decay_rate: f64,
    pub max_epochs: u32,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            max_supply: MAX_SUPPLY,
            epoch_size: EPOCH_SIZE,
            decay_rate: DECAY_RATE,
            max_epochs: MAX_EPOCHS,
        }
    }
}

impl ScheduleParams {
    /// Validated constructor.
    ///
    /// Requires a positive finite cap and epoch size with
    /// `epoch_size <= max_supply`, a decay rate in `(0, 1]` (1.0 models a
    /// flat schedule), and at least one epoch.
    pub fn new(
        max_supply: f64,
        epoch_size: f64,
        decay_rate: f64,
        max_epochs: u32,
    ) -> Result<Self, ParamError> {
        if !(max_supply > 0.0) || !max_supply.is_finite() {
            return Err(ParamError::InvalidMaxSupply(max_supply));
        }
        if !(epoch_size > 0.0) || !epoch_size.is_finite() {
            return Err(ParamError::InvalidEpochSize(epoch_size));
        }
        if epoch_size > max_supply {
            return Err(ParamError::EpochSizeExceedsSupply {
                epoch_size,
                max_supply,
            });
        }
        if !(decay_rate > 0.0 && decay_rate <= 1.0) {
            return Err(ParamError::InvalidDecayRate(decay_rate));
        }
        if max_epochs == 0 {
            return Err(ParamError::ZeroEpochs);
        }
        Ok(Self {
            max_supply,
            epoch_size,
            decay_rate,
            max_epochs,
        })
    }

    /// Number of epoch boundaries between zero supply and the cap.
    pub fn boundary_count(&self) -> u32 {
        (self.max_supply / self.epoch_size).ceil() as u32
    }

    /// Hard bound on mint sub-stepping iterations for this schedule.
    ///
    /// One possible partial step per boundary crossed, plus a final step.
    /// Equals `MAX_EPOCHS + 2` for the canonical schedule.
    pub fn max_mint_steps(&self) -> u32 {
        self.boundary_count() + 2
    }
}

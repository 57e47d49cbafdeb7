//! Caller-facing optimizer settings.

use crate::refine::PeakInterpolation;
use crate::util::{MaxPhaseError, MaxPhaseResult};

/// Default divisor applied to a peak at the zero-offset cell.
pub const DEFAULT_ZERO_SUPPRESSION: f64 = 15.0;

/// Configuration shared by every `compute_offsets` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimizerConfig {
    /// Sub-sample interpolation model.
    pub interpolation: PeakInterpolation,
    /// Divisor for a peak at the zero-offset cell; neighbours use half of it
    /// (but never less than 1).
    pub zero_suppression: f64,
    /// Number of offsets requested (K).
    pub offset_count: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            interpolation: PeakInterpolation::Parabolic,
            zero_suppression: DEFAULT_ZERO_SUPPRESSION,
            offset_count: 1,
        }
    }
}

impl OptimizerConfig {
    /// Checks settings that the type system cannot.
    pub fn validate(&self) -> MaxPhaseResult<()> {
        validate_zero_suppression(self.zero_suppression)?;
        validate_offset_count(self.offset_count)
    }
}

pub(crate) fn validate_zero_suppression(value: f64) -> MaxPhaseResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MaxPhaseError::InvalidZeroSuppression { value });
    }
    Ok(())
}

pub(crate) fn validate_offset_count(count: usize) -> MaxPhaseResult<()> {
    if count == 0 {
        return Err(MaxPhaseError::InvalidOffsetCount { count });
    }
    Ok(())
}

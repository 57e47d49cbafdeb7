//! Output of one optimizer invocation.

/// A surviving peak promoted to a continuous grid location.
#[derive(Clone, Debug, PartialEq)]
pub struct RefinedPeak {
    /// Amplitude after merging and zero-offset suppression.
    pub value: f64,
    /// Integer grid index the peak was found at.
    pub index: Vec<isize>,
    /// Sub-sample grid location.
    pub location: Vec<f64>,
}

/// Best-first physical offsets, at most `requested` of them.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizerResult {
    /// One physical offset per peak, best first.
    pub offsets: Vec<Vec<f64>>,
    /// Peaks the offsets were derived from, in the same order.
    pub peaks: Vec<RefinedPeak>,
    /// Offset count the call was configured with.
    pub requested: usize,
}

impl OptimizerResult {
    /// Result for a call without a response surface: one all-zero offset.
    ///
    /// `requested` keeps the configured count, so the result counts as
    /// shortened when more than one offset was asked for.
    pub(crate) fn zero(dims: usize, requested: usize) -> Self {
        Self {
            offsets: vec![vec![0.0; dims]],
            peaks: Vec::new(),
            requested,
        }
    }

    /// The best offset, if any candidate survived.
    pub fn best(&self) -> Option<&[f64]> {
        self.offsets.first().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// True when fewer offsets than requested could be produced.
    pub fn is_shortened(&self) -> bool {
        self.offsets.len() < self.requested
    }
}

//! Top-N maximum finders over response surfaces.
//!
//! The optimizer does not locate maxima itself; it asks a [`MaxFinder`] for
//! the N largest samples. [`TopNMaxFinder`] is the default exhaustive scan and,
//! with the `rayon` feature, [`ParallelMaxFinder`] splits the same scan across
//! slabs of the outermost axis.

use crate::candidate::topk::Candidate;
use crate::surface::{Sample, SurfaceView};
use crate::util::{MaxPhaseError, MaxPhaseResult};

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(feature = "rayon")]
pub use self::rayon::ParallelMaxFinder;
pub use scalar::TopNMaxFinder;

/// Largest samples of a surface as parallel value and index sequences.
///
/// Values are sorted in descending order; `indices[i]` is the grid index of
/// `values[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Maxima {
    pub values: Vec<f64>,
    pub indices: Vec<Vec<isize>>,
}

impl Maxima {
    /// Pairs values with their indices.
    ///
    /// Sequences of different lengths indicate a broken finder and are
    /// rejected rather than truncated.
    pub fn into_candidates(self) -> MaxPhaseResult<Vec<Candidate>> {
        if self.values.len() != self.indices.len() {
            return Err(MaxPhaseError::MaximaLengthMismatch {
                values: self.values.len(),
                indices: self.indices.len(),
            });
        }
        Ok(self
            .values
            .into_iter()
            .zip(self.indices)
            .map(|(value, index)| Candidate::new(value, index))
            .collect())
    }
}

impl From<Vec<Candidate>> for Maxima {
    fn from(candidates: Vec<Candidate>) -> Self {
        let (values, indices) = candidates.into_iter().map(|c| (c.value, c.index)).unzip();
        Self { values, indices }
    }
}

/// Capability to find the `n` largest samples of a surface.
pub trait MaxFinder<T: Sample> {
    /// Returns up to `n` maxima sorted by descending value.
    ///
    /// Errors are passed through the optimizer unchanged.
    fn top_n(&self, surface: &SurfaceView<'_, T>, n: usize) -> MaxPhaseResult<Maxima>;
}

impl<T: Sample, F: MaxFinder<T> + ?Sized> MaxFinder<T> for &F {
    fn top_n(&self, surface: &SurfaceView<'_, T>, n: usize) -> MaxPhaseResult<Maxima> {
        (**self).top_n(surface, n)
    }
}

//! MaxPhase turns a phase-correlation response surface into sub-pixel
//! translation estimates.
//!
//! Given the surface of two same-size N-dimensional images and the images'
//! origins, [`MaxPhaseOptimizer`] extracts the strongest peaks, merges peaks
//! blurred across neighbouring cells, de-emphasizes the trivial zero offset,
//! refines the survivors to sub-sample precision and converts them into
//! physical offsets. Peak extraction is pluggable through [`MaxFinder`];
//! enable the `rayon` feature for a parallel finder and `tracing` for stage
//! spans and counters.

mod candidate;
pub mod finder;
pub mod lowlevel;
pub mod optimizer;
pub mod refine;
pub mod surface;
mod trace;
pub mod util;

pub use candidate::topk::Candidate;
#[cfg(feature = "rayon")]
pub use finder::ParallelMaxFinder;
pub use finder::{MaxFinder, Maxima, TopNMaxFinder};
pub use optimizer::{
    MaxPhaseOptimizer, OptimizerConfig, OptimizerResult, RefinedPeak, DEFAULT_ZERO_SUPPRESSION,
};
pub use refine::PeakInterpolation;
pub use surface::{ImageGeometry, OwnedSurface, Sample, SurfaceView};
pub use util::{MaxPhaseError, MaxPhaseResult};

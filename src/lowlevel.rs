//! Individual optimizer stages for custom pipelines.
//!
//! Most users should call [`crate::MaxPhaseOptimizer::compute_offsets`]; these
//! re-exports allow running or testing a single stage in isolation.

pub use crate::candidate::merge::{consolidate, cull_non_positive};
pub use crate::candidate::suppress::suppress_zero_offset;
pub use crate::candidate::topk::{Candidate, TopK};
pub use crate::optimizer::offset::resolve_offset;
pub use crate::refine::{cosine_peak_offset, parabolic_peak_offset, refine_peak};

//! De-emphasis of the trivial zero-offset solution.

use crate::candidate::topk::{sort_candidates_desc, Candidate};
use crate::util::math::toroidal_chebyshev;

/// Divides the amplitude of candidates at or next to `zero_index`.
///
/// A candidate exactly at the zero-offset cell is divided by `strength`; one
/// at toroidal Chebyshev distance 1 is divided by `max(1, strength / 2)`.
/// Afterwards candidates are stably re-sorted by descending amplitude.
pub fn suppress_zero_offset(
    candidates: &mut [Candidate],
    zero_index: &[isize],
    size: &[usize],
    strength: f64,
) {
    let adjacent = (strength / 2.0).max(1.0);
    for candidate in candidates.iter_mut() {
        match toroidal_chebyshev(&candidate.index, zero_index, size) {
            0 => candidate.value /= strength,
            1 => candidate.value /= adjacent,
            _ => {}
        }
    }
    sort_candidates_desc(candidates);
}

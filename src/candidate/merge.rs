//! Culling and consolidation of raw maxima.

use crate::candidate::topk::Candidate;
use crate::util::math::toroidal_chebyshev;

/// Drops every candidate from the first non-positive value onward.
///
/// Input must be sorted by descending value, so the cut point is found by
/// binary search. NaN values are treated as non-positive.
pub fn cull_non_positive(candidates: &mut Vec<Candidate>) {
    let keep = candidates.partition_point(|c| c.value > 0.0);
    candidates.truncate(keep);
}

/// Merges candidates that belong to the same blurred peak.
///
/// Candidates are visited in the given (descending) order. Each one is folded
/// into the first already kept candidate within toroidal Chebyshev distance 1,
/// adding its amplitude; otherwise it is kept. `size` is the per-axis extent
/// used for wrap-around.
pub fn consolidate(candidates: Vec<Candidate>, size: &[usize]) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let neighbour = kept
            .iter_mut()
            .find(|k| toroidal_chebyshev(&k.index, &candidate.index, size) < 2);
        match neighbour {
            Some(k) => k.value += candidate.value,
            None => kept.push(candidate),
        }
    }

    kept
}

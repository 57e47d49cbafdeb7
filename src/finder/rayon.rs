//! Rayon-parallel maximum search (feature-gated).
//!
//! Each slab of the outermost axis is scanned on its own thread into a local
//! Top-K, and the partial results are merged. Ordering is total (value, then
//! scan ordinal), so the merged result equals the sequential scan exactly.

use crate::candidate::topk::TopK;
use crate::finder::scalar::scan_into;
use crate::finder::{MaxFinder, Maxima};
use crate::surface::{GridCursor, Sample, SurfaceView};
use crate::util::MaxPhaseResult;
use rayon::prelude::*;

/// Slab-parallel variant of [`crate::finder::TopNMaxFinder`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallelMaxFinder;

impl<T: Sample> MaxFinder<T> for ParallelMaxFinder {
    fn top_n(&self, surface: &SurfaceView<'_, T>, n: usize) -> MaxPhaseResult<Maxima> {
        let size = surface.size();
        let k = n.min(surface.len());
        let slabs = size.last().copied().unwrap_or(0);

        let per_slab = slab_capacity(k, surface.len(), slabs);

        let partials: Vec<TopK> = (0..slabs)
            .into_par_iter()
            .map(|slab| {
                let mut local = TopK::new(per_slab);
                scan_into(surface, GridCursor::slab(size, slab..slab + 1), &mut local);
                local
            })
            .collect();

        let mut topk = TopK::new(k);
        for partial in partials {
            for ranked in partial.into_ranked() {
                topk.push_ranked(ranked);
            }
        }
        Ok(Maxima::from(topk.into_sorted_desc()))
    }
}

/// Entries one slab can contribute: at most `k`, at most its own cell count.
fn slab_capacity(k: usize, cells: usize, slabs: usize) -> usize {
    k.min(cells / slabs.max(1))
}

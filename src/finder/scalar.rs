//! Sequential exhaustive maximum search.

use crate::candidate::topk::TopK;
use crate::finder::{MaxFinder, Maxima};
use crate::surface::{GridCursor, Sample, SurfaceView};
use crate::util::MaxPhaseResult;

/// Scans every cell and keeps the `n` largest finite samples.
///
/// Ties are resolved by scan order (axis 0 fastest), so results are
/// independent of the view's strides.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopNMaxFinder;

impl<T: Sample> MaxFinder<T> for TopNMaxFinder {
    fn top_n(&self, surface: &SurfaceView<'_, T>, n: usize) -> MaxPhaseResult<Maxima> {
        let mut topk = TopK::new(n.min(surface.len()));
        scan_into(surface, GridCursor::new(surface.size()), &mut topk);
        Ok(Maxima::from(topk.into_sorted_desc()))
    }
}

pub(crate) fn scan_into<T: Sample>(
    surface: &SurfaceView<'_, T>,
    mut cursor: GridCursor,
    topk: &mut TopK,
) {
    let data = surface.as_slice();
    while cursor.valid() {
        let position = cursor.position();
        let value = data[surface.offset_of(position)].to_f64();
        if value.is_finite() {
            topk.push_with(value, cursor.ordinal(), || surface.grid_index(position));
        }
        cursor.advance();
    }
}

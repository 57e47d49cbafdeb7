//! Conversion of peak locations into physical offsets.

use crate::surface::{ImageGeometry, SurfaceView};
use crate::util::math::smaller_magnitude;

/// Physical offset for a continuous peak `location` on `surface`.
///
/// Per axis, with `base = moving.origin - fixed.origin`:
///
/// * direct: `base - spacing * (location - index_origin)`
/// * mirror: `base - spacing * (location - (size + index_origin))`
///
/// The candidate with the smaller magnitude wins (direct on ties), which
/// resolves the periodic ambiguity of the correlation surface. Axes are
/// resolved independently.
pub fn resolve_offset<T>(
    surface: &SurfaceView<'_, T>,
    location: &[f64],
    fixed: &ImageGeometry,
    moving: &ImageGeometry,
) -> Vec<f64> {
    let spacing = surface.spacing();
    let size = surface.size();
    let index_origin = surface.index_origin();
    let fixed_origin = fixed.origin();
    let moving_origin = moving.origin();

    (0..location.len())
        .map(|axis| {
            let base = moving_origin[axis] - fixed_origin[axis];
            let origin = index_origin[axis] as f64;
            let wrapped = (size[axis] as isize + index_origin[axis]) as f64;
            let direct = base - spacing[axis] * (location[axis] - origin);
            let mirror = base - spacing[axis] * (location[axis] - wrapped);
            smaller_magnitude(direct, mirror)
        })
        .collect()
}

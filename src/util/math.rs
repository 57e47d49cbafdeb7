//! Grid distance and offset helpers shared by the optimizer stages.

/// Wrap-aware distance between two grid coordinates on an axis of `size` cells.
///
/// The direct distance is replaced by `size - d` once it exceeds half the
/// axis length (integer division), so cells on opposite edges are neighbours.
pub(crate) fn toroidal_axis_distance(a: isize, b: isize, size: usize) -> usize {
    let d = a.abs_diff(b);
    if d > size / 2 {
        size.saturating_sub(d)
    } else {
        d
    }
}

/// Toroidal Chebyshev distance: the largest wrap-aware per-axis distance.
pub(crate) fn toroidal_chebyshev(a: &[isize], b: &[isize], size: &[usize]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), size.len());
    a.iter()
        .zip(b)
        .zip(size)
        .map(|((&ai, &bi), &n)| toroidal_axis_distance(ai, bi, n))
        .max()
        .unwrap_or(0)
}

/// Number of raw maxima to request for `offset_count` results in `dims` dimensions.
///
/// Each blurred peak may spill into its `3^dims - 1` neighbours, so enough raw
/// candidates are requested for `ceil(offset_count / 2)` such clusters.
pub(crate) fn extraction_count(offset_count: usize, dims: usize) -> usize {
    let exponent = u32::try_from(dims).unwrap_or(u32::MAX);
    let neighbours = 3usize.saturating_pow(exponent).saturating_sub(1);
    offset_count.div_ceil(2).saturating_mul(neighbours)
}

/// Returns `direct` unless `mirror` is strictly smaller in magnitude.
pub(crate) fn smaller_magnitude(direct: f64, mirror: f64) -> f64 {
    if direct.abs() <= mirror.abs() {
        direct
    } else {
        mirror
    }
}

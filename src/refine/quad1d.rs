//! Parabolic 1D peak interpolation.

/// Relative curvature below which a three-point profile counts as flat.
const FLAT_EPS: f64 = 1e-12;

/// Estimates the sub-sample peak offset of a parabola through three samples.
///
/// Given samples at `x = -1, 0, +1` (`y0`, `y1`, `y2`), returns
/// `(y0 - y2) / (2 (y0 - 2 y1 + y2))`. Returns `None` when the profile is flat
/// (near-zero curvature), any input is non-finite, or the vertex lies more
/// than one sample away.
pub fn parabolic_peak_offset(y0: f64, y1: f64, y2: f64) -> Option<f64> {
    if !y0.is_finite() || !y1.is_finite() || !y2.is_finite() {
        return None;
    }

    let denom = y0 - 2.0 * y1 + y2;
    let scale = y0.abs().max(y1.abs()).max(y2.abs());
    if denom.abs() <= FLAT_EPS * scale {
        return None;
    }

    let dx = 0.5 * (y0 - y2) / denom;
    if dx.is_finite() && dx.abs() <= 1.0 {
        Some(dx)
    } else {
        None
    }
}

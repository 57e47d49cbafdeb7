//! Cosine-lobe 1D peak interpolation.

use std::f64::consts::PI;

const SIN_EPS: f64 = 1e-12;

/// Estimates the sub-sample peak offset assuming a cosine-shaped lobe.
///
/// With `omega = acos((y0 + y2) / (2 y1))` and
/// `theta = atan((y0 - y2) / (2 y1 sin(omega)))` the offset is
/// `-theta / (pi * omega)`. Returns `None` when the `acos` argument leaves
/// `[-1, 1]`, `sin(omega)` vanishes, or the result is non-finite or more than
/// one sample away.
pub fn cosine_peak_offset(y0: f64, y1: f64, y2: f64) -> Option<f64> {
    if !y0.is_finite() || !y1.is_finite() || !y2.is_finite() || y1 == 0.0 {
        return None;
    }

    let arg = (y0 + y2) / (2.0 * y1);
    if !arg.is_finite() || arg.abs() > 1.0 {
        return None;
    }
    let omega = arg.acos();
    let sin_omega = omega.sin();
    if sin_omega.abs() < SIN_EPS || omega == 0.0 {
        return None;
    }

    let theta = ((y0 - y2) / (2.0 * y1 * sin_omega)).atan();
    let dx = -theta / (PI * omega);
    if dx.is_finite() && dx.abs() <= 1.0 {
        Some(dx)
    } else {
        None
    }
}

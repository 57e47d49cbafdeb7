//! Sub-sample peak interpolation.
//!
//! Each axis of a peak is refined independently from the peak value and its
//! two unit-step neighbours along that axis, all other coordinates fixed.

use std::fmt;
use std::str::FromStr;

use crate::surface::{Sample, SurfaceView};
use crate::util::MaxPhaseError;

pub mod cosine;
pub mod quad1d;

pub use cosine::cosine_peak_offset;
pub use quad1d::parabolic_peak_offset;

/// Model used to interpolate a peak between grid samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PeakInterpolation {
    /// Integer grid location, no refinement.
    None,
    /// Three-point parabola fit.
    #[default]
    Parabolic,
    /// Three-point cosine-lobe fit.
    Cosine,
}

impl PeakInterpolation {
    /// Sub-sample offset for the samples `y0, y1, y2` at `-1, 0, +1`.
    ///
    /// `None` means the axis should be left at its integer location.
    pub fn peak_offset(self, y0: f64, y1: f64, y2: f64) -> Option<f64> {
        match self {
            PeakInterpolation::None => None,
            PeakInterpolation::Parabolic => parabolic_peak_offset(y0, y1, y2),
            PeakInterpolation::Cosine => cosine_peak_offset(y0, y1, y2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeakInterpolation::None => "none",
            PeakInterpolation::Parabolic => "parabolic",
            PeakInterpolation::Cosine => "cosine",
        }
    }
}

impl fmt::Display for PeakInterpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeakInterpolation {
    type Err = MaxPhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(PeakInterpolation::None),
            "parabolic" => Ok(PeakInterpolation::Parabolic),
            "cosine" => Ok(PeakInterpolation::Cosine),
            _ => Err(MaxPhaseError::UnknownInterpolation {
                name: s.to_string(),
            }),
        }
    }
}

/// Refines the grid `index` of a peak to a continuous location.
///
/// `peak_value` is the centre sample of every fit. The optimizer passes the
/// ranked amplitude, which includes merged neighbours and zero-offset
/// suppression; the two outer samples are always read from the surface.
///
/// Axes whose lower or upper neighbour falls outside the surface, and axes
/// where the fit is degenerate, keep their integer coordinate. The result may
/// therefore exceed the surface bounds by less than one sample.
pub fn refine_peak<T: Sample>(
    surface: &SurfaceView<'_, T>,
    index: &[isize],
    peak_value: f64,
    method: PeakInterpolation,
) -> Vec<f64> {
    let mut location: Vec<f64> = index.iter().map(|&i| i as f64).collect();
    if method == PeakInterpolation::None {
        return location;
    }
    let y1 = peak_value;

    let mut neighbour = index.to_vec();
    for axis in 0..index.len() {
        neighbour[axis] = index[axis] - 1;
        let y0 = surface.get(&neighbour);
        neighbour[axis] = index[axis] + 1;
        let y2 = surface.get(&neighbour);
        neighbour[axis] = index[axis];

        let (Some(y0), Some(y2)) = (y0, y2) else {
            continue;
        };
        if let Some(dx) = method.peak_offset(y0, y1, y2) {
            location[axis] += dx;
        }
    }

    location
}

#[cfg(test)]
mod tests {
    use super::{refine_peak, PeakInterpolation};
    use crate::surface::SurfaceView;
    use crate::util::MaxPhaseError;

    fn paraboloid(size: [usize; 2], center: [f64; 2]) -> Vec<f64> {
        let mut data = Vec::with_capacity(size[0] * size[1]);
        for y in 0..size[1] {
            for x in 0..size[0] {
                let dx = x as f64 - center[0];
                let dy = y as f64 - center[1];
                data.push(10.0 - dx * dx - dy * dy);
            }
        }
        data
    }

    #[test]
    fn parabolic_refinement_is_separable() {
        let data = paraboloid([7, 7], [3.3, 2.8]);
        let view = SurfaceView::from_slice(&data, &[7, 7]).unwrap();
        let y1 = view.get(&[3, 3]).unwrap();
        let loc = refine_peak(&view, &[3, 3], y1, PeakInterpolation::Parabolic);
        assert!((loc[0] - 3.3).abs() < 1e-9);
        assert!((loc[1] - 2.8).abs() < 1e-9);
    }

    #[test]
    fn boundary_axis_is_left_unrefined() {
        let data = paraboloid([5, 5], [0.2, 2.3]);
        let view = SurfaceView::from_slice(&data, &[5, 5]).unwrap();
        let y1 = view.get(&[0, 2]).unwrap();
        let loc = refine_peak(&view, &[0, 2], y1, PeakInterpolation::Parabolic);
        assert_eq!(loc[0], 0.0);
        assert!((loc[1] - 2.3).abs() < 1e-9);
    }

    #[test]
    fn none_mode_keeps_integer_location() {
        let data = paraboloid([5, 5], [2.4, 2.4]);
        let view = SurfaceView::from_slice(&data, &[5, 5]).unwrap();
        let loc = refine_peak(&view, &[2, 2], 9.68, PeakInterpolation::None);
        assert_eq!(loc, vec![2.0, 2.0]);
    }

    #[test]
    fn refinement_respects_index_origin() {
        let data = paraboloid([5, 5], [2.25, 2.0]);
        let view = SurfaceView::from_slice(&data, &[5, 5])
            .unwrap()
            .with_index_origin(&[10, -2])
            .unwrap();
        let y1 = view.get(&[12, 0]).unwrap();
        let loc = refine_peak(&view, &[12, 0], y1, PeakInterpolation::Parabolic);
        assert!((loc[0] - 12.25).abs() < 1e-9);
        assert!(loc[1].abs() < 1e-9);
    }

    #[test]
    fn centre_sample_comes_from_peak_value() {
        let mut data = vec![0.0; 9];
        data[3] = 2.0;
        data[4] = 10.0;
        data[5] = 6.0;
        let view = SurfaceView::from_slice(&data, &[9]).unwrap();

        let raw = refine_peak(&view, &[4], 10.0, PeakInterpolation::Parabolic);
        assert!((raw[0] - (4.0 + 1.0 / 6.0)).abs() < 1e-12);

        // 10 + 6 after merging: (2 - 6) / (2 * (2 - 32 + 6)) = 1 / 12.
        let merged = refine_peak(&view, &[4], 16.0, PeakInterpolation::Parabolic);
        assert!((merged[0] - (4.0 + 1.0 / 12.0)).abs() < 1e-12);
    }

    #[test]
    fn non_positive_peak_value_leaves_cosine_axis_unshifted() {
        let data = [1.0, 4.0, 2.0];
        let view = SurfaceView::from_slice(&data, &[3]).unwrap();
        let loc = refine_peak(&view, &[1], 0.0, PeakInterpolation::Cosine);
        assert_eq!(loc, vec![1.0]);
    }

    #[test]
    fn interpolation_names_parse() {
        assert_eq!("Cosine".parse::<PeakInterpolation>(), Ok(PeakInterpolation::Cosine));
        assert_eq!(" none ".parse::<PeakInterpolation>(), Ok(PeakInterpolation::None));
        assert_eq!(
            "gaussian".parse::<PeakInterpolation>(),
            Err(MaxPhaseError::UnknownInterpolation {
                name: "gaussian".to_string(),
            })
        );
        assert_eq!(PeakInterpolation::default().to_string(), "parabolic");
    }
}

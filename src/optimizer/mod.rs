//! Phase-correlation peak optimizer.
//!
//! `MaxPhaseOptimizer::compute_offsets` runs four stages in order: top-N
//! extraction through a [`MaxFinder`], culling and merging of blurred peaks,
//! zero-offset suppression with re-ranking, and per-axis sub-sample
//! refinement followed by direct/mirror offset resolution.

use crate::candidate::merge::{consolidate, cull_non_positive};
use crate::candidate::suppress::suppress_zero_offset;
use crate::finder::{MaxFinder, TopNMaxFinder};
use crate::refine::{refine_peak, PeakInterpolation};
use crate::surface::{ImageGeometry, Sample, SurfaceView};
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::math::extraction_count;
use crate::util::{MaxPhaseError, MaxPhaseResult};

mod config;
pub mod offset;
mod result;

pub use config::{OptimizerConfig, DEFAULT_ZERO_SUPPRESSION};
pub use offset::resolve_offset;
pub use result::{OptimizerResult, RefinedPeak};

use config::{validate_offset_count, validate_zero_suppression};

/// Finds the most likely translations encoded in a phase-correlation surface.
///
/// Configuration is validated when set and only read by
/// [`compute_offsets`](Self::compute_offsets), so one optimizer can serve
/// concurrent calls on independent surfaces.
#[derive(Clone, Debug, Default)]
pub struct MaxPhaseOptimizer<F = TopNMaxFinder> {
    config: OptimizerConfig,
    finder: F,
}

impl MaxPhaseOptimizer {
    /// Creates an optimizer with default settings and the exhaustive finder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> MaxPhaseOptimizer<F> {
    /// Creates an optimizer that delegates peak extraction to `finder`.
    pub fn with_finder(finder: F) -> Self {
        Self {
            config: OptimizerConfig::default(),
            finder,
        }
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, config: OptimizerConfig) -> MaxPhaseResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    pub fn set_peak_interpolation(&mut self, interpolation: PeakInterpolation) {
        self.config.interpolation = interpolation;
    }

    /// Sets the zero-offset divisor; must be finite and positive.
    pub fn set_zero_suppression(&mut self, value: f64) -> MaxPhaseResult<()> {
        validate_zero_suppression(value)?;
        self.config.zero_suppression = value;
        Ok(())
    }

    /// Sets how many offsets to produce; must be at least one.
    pub fn set_offset_count(&mut self, count: usize) -> MaxPhaseResult<()> {
        validate_offset_count(count)?;
        self.config.offset_count = count;
        Ok(())
    }

    /// Computes up to `offset_count` physical offsets, best first.
    ///
    /// Without a surface the result is a single zero offset sized by `fixed`;
    /// `requested` still holds the configured count, so that result reports
    /// [`is_shortened`](OptimizerResult::is_shortened) whenever the count is
    /// above one.
    /// Fewer offsets than requested are returned when not enough positive,
    /// distinct peaks exist. Errors from the finder are returned unchanged.
    pub fn compute_offsets<T: Sample>(
        &self,
        surface: Option<&SurfaceView<'_, T>>,
        fixed: &ImageGeometry,
        moving: &ImageGeometry,
    ) -> MaxPhaseResult<OptimizerResult>
    where
        F: MaxFinder<T>,
    {
        let requested = self.config.offset_count;
        let Some(surface) = surface else {
            trace_event!("missing_surface", dims = fixed.dims());
            return Ok(OptimizerResult::zero(fixed.dims(), requested));
        };

        let dims = surface.dims();
        check_dims("fixed image origin", dims, fixed.dims())?;
        check_dims("moving image origin", dims, moving.dims())?;

        let _span = trace_span!("compute_offsets", dims = dims, requested = requested).entered();

        let wanted = extraction_count(requested, dims);
        let maxima = self.finder.top_n(surface, wanted)?;
        let raw = maxima.values.len();
        let mut candidates = maxima.into_candidates()?;
        for candidate in &candidates {
            check_dims("maximum index", dims, candidate.index.len())?;
        }
        cull_non_positive(&mut candidates);
        trace_event!(
            "extracted",
            wanted = wanted,
            raw = raw,
            positive = candidates.len()
        );

        let mut candidates = consolidate(candidates, surface.size());
        trace_event!("consolidated", merged = candidates.len());

        suppress_zero_offset(
            &mut candidates,
            surface.index_origin(),
            surface.size(),
            self.config.zero_suppression,
        );
        if candidates.len() < requested {
            trace_event!(
                "offsets_shortened",
                requested = requested,
                available = candidates.len()
            );
        } else {
            candidates.truncate(requested);
        }

        let mut offsets = Vec::with_capacity(candidates.len());
        let mut peaks = Vec::with_capacity(candidates.len());
        for (rank, candidate) in candidates.into_iter().enumerate() {
            let location = refine_peak(
                surface,
                &candidate.index,
                candidate.value,
                self.config.interpolation,
            );
            let offset = resolve_offset(surface, &location, fixed, moving);
            trace_debug!("peak", rank = rank, value = candidate.value);
            offsets.push(offset);
            peaks.push(RefinedPeak {
                value: candidate.value,
                index: candidate.index,
                location,
            });
        }

        Ok(OptimizerResult {
            offsets,
            peaks,
            requested,
        })
    }
}

fn check_dims(context: &'static str, expected: usize, got: usize) -> MaxPhaseResult<()> {
    if expected != got {
        return Err(MaxPhaseError::DimensionMismatch {
            context,
            expected,
            got,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MaxPhaseOptimizer, OptimizerConfig};
    use crate::finder::{MaxFinder, Maxima};
    use crate::refine::PeakInterpolation;
    use crate::surface::{ImageGeometry, SurfaceView};
    use crate::util::{MaxPhaseError, MaxPhaseResult};

    struct FixedMaxima(Maxima);

    impl MaxFinder<f64> for FixedMaxima {
        fn top_n(&self, _surface: &SurfaceView<'_, f64>, _n: usize) -> MaxPhaseResult<Maxima> {
            Ok(self.0.clone())
        }
    }

    struct FailingFinder;

    impl MaxFinder<f64> for FailingFinder {
        fn top_n(&self, _surface: &SurfaceView<'_, f64>, _n: usize) -> MaxPhaseResult<Maxima> {
            Err(MaxPhaseError::MaxFinderFailed {
                reason: "device lost".to_string(),
            })
        }
    }

    fn flat_surface() -> Vec<f64> {
        vec![0.0; 64]
    }

    #[test]
    fn setters_validate_at_set_time() {
        let mut opt = MaxPhaseOptimizer::new();
        assert!(opt.set_zero_suppression(-1.0).is_err());
        assert!(opt.set_offset_count(0).is_err());
        assert_eq!(opt.config(), &OptimizerConfig::default());
        opt.set_offset_count(3).unwrap();
        opt.set_peak_interpolation(PeakInterpolation::Cosine);
        assert_eq!(opt.config().offset_count, 3);
        assert_eq!(opt.config().interpolation, PeakInterpolation::Cosine);
    }

    #[test]
    fn missing_surface_yields_single_zero_offset() {
        let opt = MaxPhaseOptimizer::new();
        let fixed = ImageGeometry::zero(3);
        let result = opt
            .compute_offsets::<f64>(None, &fixed, &fixed)
            .unwrap();
        assert_eq!(result.offsets, vec![vec![0.0, 0.0, 0.0]]);
        assert!(result.peaks.is_empty());
        assert!(!result.is_shortened());
    }

    #[test]
    fn missing_surface_reports_shortfall_for_larger_counts() {
        let mut opt = MaxPhaseOptimizer::new();
        opt.set_offset_count(3).unwrap();
        let fixed = ImageGeometry::zero(2);
        let result = opt
            .compute_offsets::<f64>(None, &fixed, &fixed)
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.requested, 3);
        assert!(result.is_shortened());
    }

    #[test]
    fn mismatched_maxima_are_fatal() {
        let data = flat_surface();
        let view = SurfaceView::from_slice(&data, &[8, 8]).unwrap();
        let opt = MaxPhaseOptimizer::with_finder(FixedMaxima(Maxima {
            values: vec![5.0, 4.0],
            indices: vec![vec![1, 1]],
        }));
        let zero = ImageGeometry::zero(2);
        let err = opt.compute_offsets(Some(&view), &zero, &zero).unwrap_err();
        assert_eq!(
            err,
            MaxPhaseError::MaximaLengthMismatch {
                values: 2,
                indices: 1,
            }
        );
    }

    #[test]
    fn finder_errors_pass_through_unchanged() {
        let data = flat_surface();
        let view = SurfaceView::from_slice(&data, &[8, 8]).unwrap();
        let opt = MaxPhaseOptimizer::with_finder(FailingFinder);
        let zero = ImageGeometry::zero(2);
        let err = opt.compute_offsets(Some(&view), &zero, &zero).unwrap_err();
        assert_eq!(
            err,
            MaxPhaseError::MaxFinderFailed {
                reason: "device lost".to_string(),
            }
        );
    }

    #[test]
    fn geometry_dimension_mismatch_is_rejected() {
        let data = flat_surface();
        let view = SurfaceView::from_slice(&data, &[8, 8]).unwrap();
        let opt = MaxPhaseOptimizer::new();
        let err = opt
            .compute_offsets(Some(&view), &ImageGeometry::zero(3), &ImageGeometry::zero(2))
            .unwrap_err();
        assert_eq!(
            err,
            MaxPhaseError::DimensionMismatch {
                context: "fixed image origin",
                expected: 2,
                got: 3,
            }
        );
    }

    #[test]
    fn injected_maxima_flow_through_all_stages() {
        let data = flat_surface();
        let view = SurfaceView::from_slice(&data, &[8, 8]).unwrap();
        let maxima = Maxima {
            values: vec![30.0, 10.0, 6.0, 4.0, -1.0],
            indices: vec![vec![0, 0], vec![3, 3], vec![4, 2], vec![6, 6], vec![5, 5]],
        };
        let opt = MaxPhaseOptimizer::with_finder(FixedMaxima(maxima))
            .with_config(OptimizerConfig {
                interpolation: PeakInterpolation::None,
                offset_count: 5,
                ..OptimizerConfig::default()
            })
            .unwrap();
        let zero = ImageGeometry::zero(2);
        let result = opt.compute_offsets(Some(&view), &zero, &zero).unwrap();

        // [4, 2] merges into [3, 3]; [0, 0] drops to 2.0; [5, 5] is culled.
        let values: Vec<f64> = result.peaks.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![16.0, 4.0, 2.0]);
        assert_eq!(result.offsets, vec![vec![-3.0, -3.0], vec![2.0, 2.0], vec![0.0, 0.0]]);
        assert!(result.is_shortened());
        assert_eq!(result.requested, 5);
    }
}

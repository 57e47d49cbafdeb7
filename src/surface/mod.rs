//! Response surfaces and image geometry.
//!
//! `SurfaceView` is a borrowed N-dimensional view into a 1D buffer with an
//! explicit stride per axis. Axis 0 varies fastest, so a contiguous 2D surface
//! of size `[width, height]` has strides `[1, width]`. Grid indices are signed
//! and start at `index_origin`; the cell at `index_origin` is the zero-offset
//! location of a phase-correlation surface.

mod cursor;
mod geometry;

pub(crate) use cursor::GridCursor;
pub use geometry::ImageGeometry;

use crate::util::{MaxPhaseError, MaxPhaseResult};

/// Scalar types a response surface may hold.
pub trait Sample: Copy + Send + Sync + 'static {
    /// Widens the sample for optimizer arithmetic.
    fn to_f64(self) -> f64;
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Borrowed N-dimensional surface with per-axis strides and physical metadata.
#[derive(Clone, Debug)]
pub struct SurfaceView<'a, T> {
    data: &'a [T],
    size: Vec<usize>,
    strides: Vec<usize>,
    spacing: Vec<f64>,
    origin: Vec<f64>,
    index_origin: Vec<isize>,
}

impl<'a, T> SurfaceView<'a, T> {
    /// Creates a contiguous view; axis 0 is the fastest-varying axis.
    pub fn from_slice(data: &'a [T], size: &[usize]) -> MaxPhaseResult<Self> {
        let strides = contiguous_strides(size)?;
        Self::new(data, size, &strides)
    }

    /// Creates a view with explicit element strides per axis.
    ///
    /// Spacing defaults to 1, origin to 0 and index origin to 0 on every axis.
    pub fn new(data: &'a [T], size: &[usize], strides: &[usize]) -> MaxPhaseResult<Self> {
        let needed = required_len(size, strides)?;
        if data.len() < needed {
            return Err(MaxPhaseError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        let dims = size.len();
        Ok(Self {
            data,
            size: size.to_vec(),
            strides: strides.to_vec(),
            spacing: vec![1.0; dims],
            origin: vec![0.0; dims],
            index_origin: vec![0; dims],
        })
    }

    /// Sets the physical distance between samples along each axis.
    pub fn with_spacing(mut self, spacing: &[f64]) -> MaxPhaseResult<Self> {
        self.check_len("spacing", spacing.len())?;
        for (axis, &s) in spacing.iter().enumerate() {
            if !s.is_finite() || s <= 0.0 {
                return Err(MaxPhaseError::InvalidSpacing { axis, spacing: s });
            }
        }
        self.spacing = spacing.to_vec();
        Ok(self)
    }

    /// Sets the physical position of the first sample.
    pub fn with_origin(mut self, origin: &[f64]) -> MaxPhaseResult<Self> {
        self.check_len("origin", origin.len())?;
        self.origin = origin.to_vec();
        Ok(self)
    }

    /// Sets the grid index of the first sample (the zero-offset cell).
    pub fn with_index_origin(mut self, index_origin: &[isize]) -> MaxPhaseResult<Self> {
        self.check_len("index origin", index_origin.len())?;
        self.index_origin = index_origin.to_vec();
        Ok(self)
    }

    /// Number of axes.
    pub fn dims(&self) -> usize {
        self.size.len()
    }

    /// Extent of each axis in samples.
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// Element stride of each axis.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn spacing(&self) -> &[f64] {
        &self.spacing
    }

    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// Grid index of the first sample; also the zero-offset location.
    pub fn index_origin(&self) -> &[isize] {
        &self.index_origin
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.size.iter().product()
    }

    /// Always false; constructors reject empty axes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the backing slice including any padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns true when `index` lies inside the surface's grid region.
    pub fn contains(&self, index: &[isize]) -> bool {
        self.relative(index).is_some()
    }

    /// Converts a relative position (`0..size` per axis) to a grid index.
    pub fn grid_index(&self, position: &[usize]) -> Vec<isize> {
        position
            .iter()
            .zip(&self.index_origin)
            .map(|(&p, &o)| o + p as isize)
            .collect()
    }

    pub(crate) fn offset_of(&self, position: &[usize]) -> usize {
        position
            .iter()
            .zip(&self.strides)
            .map(|(&p, &s)| p * s)
            .sum()
    }

    fn relative(&self, index: &[isize]) -> Option<usize> {
        if index.len() != self.dims() {
            return None;
        }
        let mut offset = 0usize;
        for axis in 0..self.dims() {
            let rel = index[axis].checked_sub(self.index_origin[axis])?;
            let rel = usize::try_from(rel).ok()?;
            if rel >= self.size[axis] {
                return None;
            }
            offset += rel * self.strides[axis];
        }
        Some(offset)
    }

    fn check_len(&self, context: &'static str, got: usize) -> MaxPhaseResult<()> {
        if got != self.dims() {
            return Err(MaxPhaseError::MetadataLength {
                context,
                expected: self.dims(),
                got,
            });
        }
        Ok(())
    }
}

impl<T: Sample> SurfaceView<'_, T> {
    /// Returns the sample at grid `index`, or `None` outside the surface.
    pub fn get(&self, index: &[isize]) -> Option<f64> {
        let offset = self.relative(index)?;
        self.data.get(offset).map(|v| v.to_f64())
    }
}

/// Owned contiguous surface buffer with physical metadata.
#[derive(Clone, Debug)]
pub struct OwnedSurface<T> {
    data: Vec<T>,
    size: Vec<usize>,
    strides: Vec<usize>,
    spacing: Vec<f64>,
    origin: Vec<f64>,
    index_origin: Vec<isize>,
}

impl<T> OwnedSurface<T> {
    /// Takes ownership of a contiguous buffer laid out with axis 0 fastest.
    pub fn new(data: Vec<T>, size: &[usize]) -> MaxPhaseResult<Self> {
        let dims = size.len();
        let strides = SurfaceView::from_slice(&data, size)?.strides;
        Ok(Self {
            data,
            size: size.to_vec(),
            strides,
            spacing: vec![1.0; dims],
            origin: vec![0.0; dims],
            index_origin: vec![0; dims],
        })
    }

    /// Sets physical spacing, validated as in [`SurfaceView::with_spacing`].
    pub fn with_spacing(mut self, spacing: &[f64]) -> MaxPhaseResult<Self> {
        self.view().with_spacing(spacing)?;
        self.spacing = spacing.to_vec();
        Ok(self)
    }

    pub fn with_origin(mut self, origin: &[f64]) -> MaxPhaseResult<Self> {
        self.view().with_origin(origin)?;
        self.origin = origin.to_vec();
        Ok(self)
    }

    pub fn with_index_origin(mut self, index_origin: &[isize]) -> MaxPhaseResult<Self> {
        self.view().with_index_origin(index_origin)?;
        self.index_origin = index_origin.to_vec();
        Ok(self)
    }

    /// Returns the owned samples.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the samples, for synthesizing surfaces in place.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// Borrows the buffer and metadata as a view.
    pub fn view(&self) -> SurfaceView<'_, T> {
        SurfaceView {
            data: &self.data,
            size: self.size.clone(),
            strides: self.strides.clone(),
            spacing: self.spacing.clone(),
            origin: self.origin.clone(),
            index_origin: self.index_origin.clone(),
        }
    }
}

fn contiguous_strides(size: &[usize]) -> MaxPhaseResult<Vec<usize>> {
    let mut strides = Vec::with_capacity(size.len());
    let mut acc = 1usize;
    for &n in size {
        strides.push(acc);
        acc = acc.checked_mul(n).ok_or(MaxPhaseError::InvalidDimensions {
            size: size.to_vec(),
        })?;
    }
    Ok(strides)
}

fn required_len(size: &[usize], strides: &[usize]) -> MaxPhaseResult<usize> {
    if size.is_empty() || size.contains(&0) {
        return Err(MaxPhaseError::InvalidDimensions {
            size: size.to_vec(),
        });
    }
    if strides.len() != size.len() {
        return Err(MaxPhaseError::MetadataLength {
            context: "strides",
            expected: size.len(),
            got: strides.len(),
        });
    }

    // Sort axes by stride; each stride must clear the span of all smaller ones.
    let mut order: Vec<usize> = (0..size.len()).collect();
    order.sort_by_key(|&axis| strides[axis]);
    let mut span = 1usize;
    for &axis in &order {
        if strides[axis] < span {
            return Err(MaxPhaseError::InvalidStride {
                axis,
                stride: strides[axis],
                min: span,
            });
        }
        span = (size[axis] - 1)
            .checked_mul(strides[axis])
            .and_then(|v| v.checked_add(span))
            .ok_or(MaxPhaseError::InvalidDimensions {
                size: size.to_vec(),
            })?;
    }
    Ok(span)
}

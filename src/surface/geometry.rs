//! Physical placement of the two source images.

/// Origin record of a source image; pixel data is not needed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageGeometry {
    origin: Vec<f64>,
}

impl ImageGeometry {
    /// Creates a geometry from the physical position of the first pixel.
    pub fn new(origin: Vec<f64>) -> Self {
        Self { origin }
    }

    /// Geometry at the physical origin in `dims` dimensions.
    pub fn zero(dims: usize) -> Self {
        Self {
            origin: vec![0.0; dims],
        }
    }

    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    pub fn dims(&self) -> usize {
        self.origin.len()
    }
}

impl From<Vec<f64>> for ImageGeometry {
    fn from(origin: Vec<f64>) -> Self {
        Self::new(origin)
    }
}

impl From<&[f64]> for ImageGeometry {
    fn from(origin: &[f64]) -> Self {
        Self::new(origin.to_vec())
    }
}

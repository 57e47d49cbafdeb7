//! Odometer-style traversal of an N-dimensional grid.

use std::ops::Range;

/// Walks grid positions with axis 0 varying fastest.
///
/// `ordinal` is the position's linear index in a contiguous layout of the
/// full grid; it increases by one per step and gives scans a stable order
/// that does not depend on the view's strides.
pub(crate) struct GridCursor {
    position: Vec<usize>,
    size: Vec<usize>,
    last_end: usize,
    ordinal: usize,
    valid: bool,
}

impl GridCursor {
    /// Visits every cell of a grid of `size`.
    pub(crate) fn new(size: &[usize]) -> Self {
        let last = size.last().copied().unwrap_or(0);
        Self::slab(size, 0..last)
    }

    /// Visits the cells whose outermost coordinate lies in `last`.
    pub(crate) fn slab(size: &[usize], last: Range<usize>) -> Self {
        let dims = size.len();
        let inner: usize = size[..dims.saturating_sub(1)].iter().product();
        let mut position = vec![0; dims];
        if let Some(p) = position.last_mut() {
            *p = last.start;
        }
        let valid = dims > 0 && size.iter().all(|&n| n > 0) && last.start < last.end;
        Self {
            position,
            size: size.to_vec(),
            last_end: last.end,
            ordinal: last.start * inner,
            valid,
        }
    }

    pub(crate) fn valid(&self) -> bool {
        self.valid
    }

    pub(crate) fn position(&self) -> &[usize] {
        &self.position
    }

    pub(crate) fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub(crate) fn advance(&mut self) {
        if !self.valid {
            return;
        }
        self.ordinal += 1;
        let dims = self.position.len();
        for axis in 0..dims {
            let end = if axis + 1 == dims {
                self.last_end
            } else {
                self.size[axis]
            };
            self.position[axis] += 1;
            if self.position[axis] < end {
                return;
            }
            if axis + 1 < dims {
                self.position[axis] = 0;
            }
        }
        self.valid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::GridCursor;

    fn collect(mut cursor: GridCursor) -> Vec<(usize, Vec<usize>)> {
        let mut out = Vec::new();
        while cursor.valid() {
            out.push((cursor.ordinal(), cursor.position().to_vec()));
            cursor.advance();
        }
        out
    }

    #[test]
    fn full_walk_is_axis_zero_fastest() {
        let cells = collect(GridCursor::new(&[2, 3]));
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], (0, vec![0, 0]));
        assert_eq!(cells[1], (1, vec![1, 0]));
        assert_eq!(cells[2], (2, vec![0, 1]));
        assert_eq!(cells[5], (5, vec![1, 2]));
    }

    #[test]
    fn slab_walk_keeps_global_ordinals() {
        let cells = collect(GridCursor::slab(&[2, 2, 3], 1..2));
        let ordinals: Vec<usize> = cells.iter().map(|(o, _)| *o).collect();
        assert_eq!(ordinals, vec![4, 5, 6, 7]);
        assert!(cells.iter().all(|(_, p)| p[2] == 1));
    }

    #[test]
    fn one_dimensional_walk_ends_at_extent() {
        let cells = collect(GridCursor::new(&[3]));
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2], (2, vec![2]));
    }

    #[test]
    fn empty_slab_is_invalid() {
        assert!(!GridCursor::slab(&[2, 2], 1..1).valid());
    }
}

//! Top-K tracking of surface maxima.

use std::cmp::Ordering;

/// Peak amplitude paired with an integer grid location.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Response amplitude; accumulates merged neighbours during consolidation.
    pub value: f64,
    /// Grid index of the peak (includes the surface's index origin).
    pub index: Vec<isize>,
}

impl Candidate {
    pub fn new(value: f64, index: Vec<isize>) -> Self {
        Self { value, index }
    }
}

/// Candidate tagged with its scan ordinal for deterministic ordering.
#[derive(Clone, Debug)]
pub(crate) struct Ranked {
    pub(crate) candidate: Candidate,
    pub(crate) ordinal: usize,
}

fn rank_cmp_desc(a_value: f64, a_ord: usize, b_value: f64, b_ord: usize) -> Ordering {
    b_value.total_cmp(&a_value).then_with(|| a_ord.cmp(&b_ord))
}

fn ranked_cmp_desc(a: &Ranked, b: &Ranked) -> Ordering {
    rank_cmp_desc(a.candidate.value, a.ordinal, b.candidate.value, b.ordinal)
}

/// Sorts candidates by descending value; equal values keep their order.
pub(crate) fn sort_candidates_desc(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.value.total_cmp(&a.value));
}

/// Top-K container with O(k) insertion cost.
pub struct TopK {
    k: usize,
    items: Vec<Ranked>,
}

impl TopK {
    /// Creates a new Top-K collector.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            items: Vec::with_capacity(k),
        }
    }

    /// Pushes a value, building its index only if it is retained.
    ///
    /// Lower ordinals win ties, so the result does not depend on push order.
    pub fn push_with<F>(&mut self, value: f64, ordinal: usize, index: F)
    where
        F: FnOnce() -> Vec<isize>,
    {
        if self.k == 0 {
            return;
        }
        if self.items.len() < self.k {
            self.items.push(Ranked {
                candidate: Candidate::new(value, index()),
                ordinal,
            });
            return;
        }

        let worst_idx = self.worst_idx();
        let worst = &self.items[worst_idx];
        if rank_cmp_desc(value, ordinal, worst.candidate.value, worst.ordinal) == Ordering::Less {
            self.items[worst_idx] = Ranked {
                candidate: Candidate::new(value, index()),
                ordinal,
            };
        }
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn push_ranked(&mut self, ranked: Ranked) {
        let Ranked { candidate, ordinal } = ranked;
        let Candidate { value, index } = candidate;
        self.push_with(value, ordinal, move || index);
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn into_ranked(self) -> Vec<Ranked> {
        self.items
    }

    /// Returns candidates sorted by descending value.
    pub fn into_sorted_desc(mut self) -> Vec<Candidate> {
        self.items.sort_by(ranked_cmp_desc);
        self.items.into_iter().map(|r| r.candidate).collect()
    }

    fn worst_idx(&self) -> usize {
        let mut worst_idx = 0usize;
        for (idx, item) in self.items.iter().enumerate().skip(1) {
            if ranked_cmp_desc(item, &self.items[worst_idx]) == Ordering::Greater {
                worst_idx = idx;
            }
        }
        worst_idx
    }
}

//! The reading sequence

use crate::metrics;

/// An ordered, immutable series of depth readings
///
/// Index 0 is the first reading in the input. Derived sequences (window
/// sums) are new `Readings`, never in-place edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readings(Vec<i64>);

impl Readings {
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of readings strictly greater than the one before
    pub fn increases(&self) -> usize {
        metrics::count_increases(&self.0)
    }

    /// Sliding-window sums of `width` consecutive readings
    pub fn windowed(&self, width: usize) -> Readings {
        Readings(metrics::window_sums(&self.0, width))
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl From<Vec<i64>> for Readings {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl FromIterator<i64> for Readings {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

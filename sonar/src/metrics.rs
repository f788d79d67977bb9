//! Increase counting and window summing
//!
//! Both reported metrics go through [`count_increases`]; the windowed metric
//! first maps the series through [`window_sums`].

use serde::Serialize;

use crate::Readings;

/// Count adjacent pairs where the later value is strictly greater
///
/// Sequences shorter than two values have no pairs and count as 0.
pub fn count_increases(values: &[i64]) -> usize {
    values.windows(2).filter(|pair| pair[1] > pair[0]).count()
}

/// Sum every run of `width` consecutive values, in order
///
/// The result has `len - width + 1` elements, or none when the input is
/// shorter than one window. A zero width yields no windows. Sums saturate at
/// the `i64` bounds.
pub fn window_sums(values: &[i64], width: usize) -> Vec<i64> {
    if width == 0 {
        return Vec::new();
    }

    values
        .windows(width)
        .map(|window| window.iter().fold(0i64, |acc, v| acc.saturating_add(*v)))
        .collect()
}

/// Both metrics for one reading sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Increases between adjacent readings
    pub increases: usize,
    /// Increases between adjacent window sums
    pub windowed_increases: usize,
}

impl Report {
    pub fn compute(readings: &Readings, window_width: usize) -> Self {
        Self {
            increases: readings.increases(),
            windowed_increases: readings.windowed(window_width).increases(),
        }
    }

    /// Value of metric `part` (1 or 2)
    pub fn part(&self, part: u8) -> Option<usize> {
        match part {
            1 => Some(self.increases),
            2 => Some(self.windowed_increases),
            _ => None,
        }
    }
}

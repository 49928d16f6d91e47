#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Evenly spaced time points over the closed interval `[start, end]`.
///
/// Both endpoints are included, so `count` points leave `count - 1` gaps.
/// A grid with one point sits at `start`; an empty grid has no points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    /// First time point (seconds)
    pub start: f64,
    /// Last time point (seconds), included when `count >= 2`
    pub end: f64,
    /// Number of points
    pub count: usize,
}

impl SampleGrid {
    /// One second at 500 points, used for the signal plots.
    pub const SIGNALS: SampleGrid = SampleGrid::new(0.0, 1.0, 500);

    /// Twenty seconds at 2000 points, used for the Fourier plot.
    pub const FOURIER: SampleGrid = SampleGrid::new(0.0, 20.0, 2000);

    pub const fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Spacing between neighbouring points. Zero for grids under two points.
    pub fn step(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.count - 1) as f64
        }
    }

    /// Length of the covered interval.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Time of point `index`, or `None` past the end.
    ///
    /// The last point is pinned to `end` so it never drifts by rounding.
    pub fn at(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        if index + 1 == self.count && self.count > 1 {
            return Some(self.end);
        }
        Some(self.start + index as f64 * self.step())
    }

    /// Iterate all time points in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).filter_map(move |i| self.at(i))
    }

    /// Effective sample rate in points per second, if the grid has spacing.
    pub fn sample_rate(&self) -> Option<f64> {
        let step = self.step();
        (step > 0.0).then(|| 1.0 / step)
    }
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self::SIGNALS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_both_endpoints() {
        let grid = SampleGrid::new(0.0, 1.0, 5);
        let times: Vec<f64> = grid.times().collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn stock_grids() {
        assert_eq!(SampleGrid::SIGNALS.len(), 500);
        assert_eq!(SampleGrid::SIGNALS.at(499), Some(1.0));
        assert_eq!(SampleGrid::FOURIER.len(), 2000);
        assert_eq!(SampleGrid::FOURIER.at(1999), Some(20.0));
        assert!((SampleGrid::FOURIER.step() - 20.0 / 1999.0).abs() < 1e-15);
    }

    #[test]
    fn degenerate_counts() {
        let empty = SampleGrid::new(0.0, 1.0, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.times().count(), 0);
        assert_eq!(empty.at(0), None);

        let single = SampleGrid::new(2.0, 5.0, 1);
        assert_eq!(single.times().collect::<Vec<_>>(), vec![2.0]);
        assert_eq!(single.step(), 0.0);
        assert_eq!(single.sample_rate(), None);
    }

    #[test]
    fn sample_rate_from_spacing() {
        let grid = SampleGrid::new(0.0, 1.0, 101);
        let rate = grid.sample_rate().unwrap();
        assert!((rate - 100.0).abs() < 1e-9);
    }
}

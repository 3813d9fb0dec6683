// File: crates/thread-timings/src/projection.rs
// Summary: Splits the two sorted series into a shared thread axis and two time columns.

use tracing::debug;

use crate::measurement::TimingSeries;

/// Parallel columns plotted by the chart.
///
/// The thread axis comes from the single-threaded series alone. The
/// multithreaded thread counts are dropped without being compared, so both
/// inputs are expected to cover the same thread counts once sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub threads: Vec<u32>,
    pub single_seconds: Vec<f64>,
    pub multi_seconds: Vec<f64>,
}

impl Projection {
    /// Consumes both series; expects them already sorted by thread count.
    pub fn from_series(single: TimingSeries, multi: TimingSeries) -> Self {
        let p = Self {
            threads: single.thread_counts(),
            single_seconds: single.seconds(),
            multi_seconds: multi.seconds(),
        };
        debug!(
            points = p.threads.len(),
            multi_points = p.multi_seconds.len(),
            "projected series onto shared thread axis"
        );
        p
    }

    /// Thread axis as chart coordinates.
    pub fn axis(&self) -> Vec<f64> {
        self.threads.iter().map(|&t| f64::from(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{Measurement, RunMode};

    fn series(mode: RunMode, pts: &[(u32, f64)]) -> TimingSeries {
        TimingSeries::from_measurements(mode, pts.iter().map(|&(t, s)| Measurement::new(t, s)).collect())
    }

    #[test]
    fn axis_comes_from_single_threaded_series() {
        let single = series(RunMode::SingleThreaded, &[(1, 10.0), (2, 5.5), (4, 3.25)]);
        let multi = series(RunMode::Multithreaded, &[(1, 10.0), (2, 2.9), (4, 1.6)]);
        let p = Projection::from_series(single, multi);
        assert_eq!(p.threads, vec![1, 2, 4]);
        assert_eq!(p.axis(), vec![1.0, 2.0, 4.0]);
        assert_eq!(p.single_seconds, vec![10.0, 5.5, 3.25]);
        assert_eq!(p.multi_seconds, vec![10.0, 2.9, 1.6]);
    }

    #[test]
    fn multithreaded_counts_are_not_validated() {
        // Different thread counts, same length: accepted as-is.
        let single = series(RunMode::SingleThreaded, &[(1, 4.0), (2, 3.0)]);
        let multi = series(RunMode::Multithreaded, &[(8, 1.0), (16, 0.5)]);
        let p = Projection::from_series(single, multi);
        assert_eq!(p.threads, vec![1, 2]);
        assert_eq!(p.multi_seconds, vec![1.0, 0.5]);
    }

    #[test]
    fn length_mismatch_is_reported_not_fixed() {
        let single = series(RunMode::SingleThreaded, &[(1, 4.0), (2, 3.0)]);
        let multi = series(RunMode::Multithreaded, &[(1, 1.0)]);
        let p = Projection::from_series(single, multi);
        assert_eq!(p.threads.len(), 2);
        assert_eq!(p.multi_seconds, vec![1.0]);
    }
}

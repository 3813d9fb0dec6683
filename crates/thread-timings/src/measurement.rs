// File: crates/thread-timings/src/measurement.rs
// Summary: Measurement, run mode and the per-mode timing series.

use std::fmt;

/// One `(thread count, elapsed seconds)` data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub threads: u32,
    pub seconds: f64,
}

impl Measurement {
    pub const fn new(threads: u32, seconds: f64) -> Self {
        Self { threads, seconds }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunMode {
    SingleThreaded,
    Multithreaded,
}

impl RunMode {
    /// Legend text for the mode.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleThreaded => "Single-threaded",
            Self::Multithreaded => "Multithreaded",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measurements of one run mode, in file order until sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingSeries {
    mode: RunMode,
    measurements: Vec<Measurement>,
}

impl TimingSeries {
    pub fn new(mode: RunMode) -> Self {
        Self { mode, measurements: Vec::new() }
    }

    pub fn from_measurements(mode: RunMode, measurements: Vec<Measurement>) -> Self {
        Self { mode, measurements }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn push(&mut self, m: Measurement) {
        self.measurements.push(m);
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Stable ascending sort by thread count; equal counts keep file order.
    pub fn sort_by_threads(&mut self) {
        self.measurements.sort_by_key(|m| m.threads);
    }

    pub fn thread_counts(&self) -> Vec<u32> {
        self.measurements.iter().map(|m| m.threads).collect()
    }

    pub fn seconds(&self) -> Vec<f64> {
        self.measurements.iter().map(|m| m.seconds).collect()
    }

    /// Smallest and largest thread count, if any.
    pub fn thread_range(&self) -> Option<(u32, u32)> {
        let min = self.measurements.iter().map(|m| m.threads).min()?;
        let max = self.measurements.iter().map(|m| m.threads).max()?;
        Some((min, max))
    }
}

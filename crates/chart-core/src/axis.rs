// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label and data range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Unit range with the given label; meant to be replaced by autoscaling.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    pub fn default_x() -> Self {
        Self::labeled("X")
    }

    pub fn default_y() -> Self {
        Self::labeled("Y")
    }
}

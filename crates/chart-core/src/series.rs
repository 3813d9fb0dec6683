// File: crates/chart-core/src/series.rs
// Summary: Line series model with optional legend label and point marker.

use crate::error::{RenderError, Result};

/// Glyph drawn at every data point of a series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    None,
    Circle,
}

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend text; unlabeled series are left out of the legend.
    pub label: Option<String>,
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Marker,
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { label: None, data_xy: data, marker: Marker::None }
    }

    /// Pair up separate X and Y columns into a labeled line series.
    /// Both columns must have the same length.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Result<Self> {
        let label = label.into();
        if xs.len() != ys.len() {
            return Err(RenderError::SeriesLength { label, x_len: xs.len(), y_len: ys.len() });
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self::line(data).with_label(label))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }
}

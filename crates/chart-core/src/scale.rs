// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::geometry::RectI32;
use crate::Axis;

/// Maps the data interval `[d0, d1]` onto the pixel interval `[p0, p1]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let mut s = Self { d0, d1, p0, p1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }

    /// Left-to-right mapping of `axis` across the plot rect.
    pub fn horizontal(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.min, axis.max, plot.left as f32, plot.right as f32)
    }

    /// Bottom-to-top mapping of `axis` (screen Y grows downward).
    pub fn vertical(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.min, axis.max, plot.bottom as f32, plot.top as f32)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.p0 + t as f32 * (self.p1 - self.p0)
    }
}

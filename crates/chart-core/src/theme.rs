// File: crates/chart-core/src/theme.rs
// Summary: Light theme colors and the series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    /// Stroke colors handed out to series in insertion order.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 222, 222, 222),
            axis_line: skia::Color::from_argb(255, 40, 40, 40),
            axis_label: skia::Color::from_argb(255, 20, 20, 20),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            title: skia::Color::from_argb(255, 10, 10, 10),
            legend_fill: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd), // purple
                skia::Color::from_argb(255, 0x8c, 0x56, 0x4b), // brown
            ],
        }
    }

    /// Palette color for the `index`-th series, cycling when exhausted.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

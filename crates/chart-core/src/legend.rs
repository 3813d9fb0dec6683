// File: crates/chart-core/src/legend.rs
// Summary: Legend box listing labeled series with a line + marker swatch.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;

pub const FONT_SIZE: f32 = 13.0;
const ROW_HEIGHT: f32 = 22.0;
const PADDING: f32 = 8.0;
const SWATCH_WIDTH: f32 = 28.0;
const GAP: f32 = 8.0;
const MIN_TEXT_WIDTH: f32 = 40.0;

/// One legend row: label text and the stroke color of its series.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
    pub marker: Marker,
}

/// Legend rows for every labeled series, colored the way the series are drawn.
pub fn entries(series: &[Series], theme: &Theme) -> Vec<LegendEntry> {
    series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            s.label.as_ref().map(|label| LegendEntry {
                label: label.clone(),
                color: theme.series_color(i),
                marker: s.marker,
            })
        })
        .collect()
}

/// Legend rect anchored to the upper-right corner of `plot`.
/// Without a shaper the text column falls back to a fixed width.
pub fn layout(entries: &[LegendEntry], plot: &RectI32, shaper: Option<&TextShaper>) -> skia::Rect {
    let text_w = entries
        .iter()
        .map(|e| shaper.map_or(MIN_TEXT_WIDTH, |sh| sh.measure_width(&e.label, FONT_SIZE, false)))
        .fold(MIN_TEXT_WIDTH, f32::max);
    let w = PADDING * 2.0 + SWATCH_WIDTH + GAP + text_w;
    let h = PADDING * 2.0 + ROW_HEIGHT * entries.len() as f32;
    let right = plot.right as f32 - 10.0;
    let top = plot.top as f32 + 10.0;
    skia::Rect::from_ltrb(right - w, top, right, top + h)
}

pub fn draw_legend(
    canvas: &skia::Canvas,
    plot: &RectI32,
    entries: &[LegendEntry],
    theme: &Theme,
    line_width: f32,
    marker_radius: f32,
    shaper: Option<&TextShaper>,
) {
    if entries.is_empty() { return; }
    let rect = layout(entries, plot, shaper);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    let rrect = skia::RRect::new_rect_xy(rect, 3.0, 3.0);
    canvas.draw_rrect(rrect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rrect(rrect, &border);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(line_width);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);

    for (row, e) in entries.iter().enumerate() {
        let cy = rect.top + PADDING + ROW_HEIGHT * (row as f32 + 0.5);
        let x0 = rect.left + PADDING;
        let x1 = x0 + SWATCH_WIDTH;
        stroke.set_color(e.color);
        canvas.draw_line((x0, cy), (x1, cy), &stroke);
        if e.marker == Marker::Circle {
            dot.set_color(e.color);
            canvas.draw_circle(((x0 + x1) * 0.5, cy), marker_radius, &dot);
        }
        if let Some(sh) = shaper {
            sh.draw_left(canvas, &e.label, x1 + GAP, cy + FONT_SIZE * 0.35, FONT_SIZE, theme.axis_label, false);
        }
    }
}

// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::{RenderError, Result};
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks, tick_decimals};
use crate::legend;
use crate::scale::LinearScale;
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 4.0;
const MAX_X_TICKS: usize = 9;
const MAX_Y_TICKS: usize = 7;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis labels, tick labels, legend text). Off for
    /// pixel-exact comparisons since font availability varies per machine.
    pub draw_labels: bool,
    pub line_width: f32,
    pub marker_radius: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            line_width: 1.5,
            marker_radius: 3.5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
            show_legend: false,
            show_grid: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Fit both axis ranges to the data, padding each side by `margin` times the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::fit(self, margin).apply_to_chart(self);
    }

    /// Render into a tightly packed RGBA8 buffer.
    /// Returns `(pixels, width, height, stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;
        self.draw(surface.canvas(), opts, w, h);

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`.
    /// The image is fully encoded before the file is touched.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        let write_err = |source| RenderError::Write { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, bytes).map_err(write_err)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, width: i32, height: i32) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(width, height, &opts.insets);
        let sx = LinearScale::horizontal(&self.x_axis, &plot);
        let sy = LinearScale::vertical(&self.y_axis, &plot);
        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, MAX_X_TICKS);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, MAX_Y_TICKS);

        if self.show_grid {
            draw_grid(canvas, &plot, &x_ticks, &y_ticks, &sx, &sy, theme);
        }

        canvas.save();
        canvas.clip_rect(to_rect(&plot), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = theme.series_color(i);
            draw_line_series(canvas, &sx, &sy, s, color, opts);
        }
        canvas.restore();

        draw_frame(canvas, &plot, &x_ticks, &y_ticks, &sx, &sy, theme);

        let shaper = opts.draw_labels.then(TextShaper::new);
        if let Some(sh) = &shaper {
            self.draw_text(canvas, sh, &plot, &x_ticks, &y_ticks, &sx, &sy, theme);
        }

        if self.show_legend {
            let entries = legend::entries(&self.series, theme);
            legend::draw_legend(canvas, &plot, &entries, theme, opts.line_width, opts.marker_radius, shaper.as_ref());
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        canvas: &skia::Canvas,
        sh: &TextShaper,
        plot: &RectI32,
        x_ticks: &[f64],
        y_ticks: &[f64],
        sx: &LinearScale,
        sy: &LinearScale,
        theme: &Theme,
    ) {
        let x_dec = tick_decimals(nice_step(self.x_axis.min, self.x_axis.max, MAX_X_TICKS));
        for &t in x_ticks {
            let label = format_tick(t, x_dec);
            sh.draw_centered(canvas, &label, sx.to_px(t), plot.bottom as f32 + TICK_LEN + 3.0, TICK_SIZE, theme.tick);
        }
        let y_dec = tick_decimals(nice_step(self.y_axis.min, self.y_axis.max, MAX_Y_TICKS));
        for &t in y_ticks {
            let label = format_tick(t, y_dec);
            sh.draw_right_middle(canvas, &label, plot.left as f32 - TICK_LEN - 4.0, sy.to_px(t), TICK_SIZE, theme.tick, true);
        }

        if !self.x_axis.label.is_empty() {
            sh.draw_centered(canvas, &self.x_axis.label, plot.center_x(), plot.bottom as f32 + 30.0, LABEL_SIZE, theme.axis_label);
        }
        if !self.y_axis.label.is_empty() {
            let cx = (plot.left as f32 - 68.0).max(LABEL_SIZE);
            sh.draw_vertical(canvas, &self.y_axis.label, cx, plot.center_y(), LABEL_SIZE, theme.axis_label);
        }
        if let Some(title) = &self.title {
            let top = (plot.top as f32 - TITLE_SIZE * 1.9).max(2.0);
            sh.draw_centered(canvas, title, plot.center_x(), top, TITLE_SIZE, theme.title);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(to_rect(plot), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick_paint);
    }
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick_paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    color: skia::Color,
    opts: &RenderOptions,
) {
    let runs = finite_runs(&series.data_xy, sx, sy);
    if runs.is_empty() {
        return;
    }

    let mut path = skia::Path::new();
    for run in runs.iter().filter(|r| r.len() >= 2) {
        path.move_to(run[0]);
        for &p in &run[1..] {
            path.line_to(p);
        }
    }
    if !path.is_empty() {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(opts.line_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }

    if series.marker == Marker::Circle {
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        dot.set_color(color);
        for &p in runs.iter().flatten() {
            canvas.draw_circle(p, opts.marker_radius, &dot);
        }
    }
}

/// Pixel positions of `data` split into runs of consecutive finite points.
/// A NaN or infinite sample ends the current run so no line bridges it.
fn finite_runs(data: &[(f64, f64)], sx: &LinearScale, sy: &LinearScale) -> Vec<Vec<(f32, f32)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            current.push((sx.to_px(x), sy.to_px(y)));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

// File: crates/thread-timings/src/figure.rs
// Summary: Builds the execution-time-vs-threads chart from a projection.

use chart_core::{Axis, Chart, Marker, RenderError, RenderOptions, Series};

use crate::measurement::RunMode;
use crate::projection::Projection;

pub const TITLE: &str = "Execution Time vs. Number of Threads";
pub const X_LABEL: &str = "Number of Threads";
pub const Y_LABEL: &str = "Execution Time (seconds)";

/// 10 x 6 inch figure at 100 dpi.
pub const FIGURE_WIDTH: i32 = 1000;
pub const FIGURE_HEIGHT: i32 = 600;

/// Padding added around the data on both axes, as a fraction of the span.
pub const AXIS_MARGIN: f64 = 0.05;

pub fn render_options() -> RenderOptions {
    RenderOptions { width: FIGURE_WIDTH, height: FIGURE_HEIGHT, ..RenderOptions::default() }
}

/// Two marked line series over the shared thread axis, with title, axis
/// labels, legend and grid. Fails if a time column does not match the
/// axis length.
pub fn build_chart(p: &Projection) -> Result<Chart, RenderError> {
    let axis = p.axis();
    let mut chart = Chart::new();
    chart.x_axis = Axis::labeled(X_LABEL);
    chart.y_axis = Axis::labeled(Y_LABEL);
    chart.set_title(TITLE);
    chart.add_series(
        Series::from_columns(RunMode::SingleThreaded.label(), &axis, &p.single_seconds)?
            .with_marker(Marker::Circle),
    );
    chart.add_series(
        Series::from_columns(RunMode::Multithreaded.label(), &axis, &p.multi_seconds)?
            .with_marker(Marker::Circle),
    );
    chart.show_legend = true;
    chart.show_grid = true;
    chart.autoscale_axes(AXIS_MARGIN);
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Projection {
        Projection {
            threads: vec![1, 2, 4],
            single_seconds: vec![10.0, 5.5, 3.25],
            multi_seconds: vec![10.0, 2.9, 1.6],
        }
    }

    #[test]
    fn chart_has_labeled_marked_series() {
        let chart = build_chart(&sample()).unwrap();
        assert_eq!(chart.title.as_deref(), Some(TITLE));
        assert_eq!(chart.x_axis.label, X_LABEL);
        assert_eq!(chart.y_axis.label, Y_LABEL);
        assert!(chart.show_legend && chart.show_grid);

        assert_eq!(chart.series.len(), 2);
        let (single, multi) = (&chart.series[0], &chart.series[1]);
        assert_eq!(single.label.as_deref(), Some("Single-threaded"));
        assert_eq!(multi.label.as_deref(), Some("Multithreaded"));
        assert_eq!(single.marker, Marker::Circle);
        assert_eq!(multi.marker, Marker::Circle);
        assert_eq!(single.data_xy, vec![(1.0, 10.0), (2.0, 5.5), (4.0, 3.25)]);
        assert_eq!(multi.data_xy, vec![(1.0, 10.0), (2.0, 2.9), (4.0, 1.6)]);
    }

    #[test]
    fn axes_cover_the_data() {
        let chart = build_chart(&sample()).unwrap();
        assert!(chart.x_axis.min < 1.0 && chart.x_axis.max > 4.0);
        assert!(chart.y_axis.min < 1.6 && chart.y_axis.max > 10.0);
    }

    #[test]
    fn mismatched_multithreaded_length_fails() {
        let mut p = sample();
        p.multi_seconds.pop();
        let err = build_chart(&p).unwrap_err();
        assert!(matches!(err, RenderError::SeriesLength { ref label, x_len: 3, y_len: 2 } if label == "Multithreaded"));
    }

    #[test]
    fn empty_projection_builds_an_empty_chart() {
        let p = Projection { threads: vec![], single_seconds: vec![], multi_seconds: vec![] };
        let chart = build_chart(&p).unwrap();
        assert!(chart.series.iter().all(|s| s.data_xy.is_empty()));
    }

    #[test]
    fn figure_is_ten_by_six_inches() {
        let opts = render_options();
        assert_eq!((opts.width, opts.height), (1000, 600));
        assert!(opts.draw_labels);
    }
}

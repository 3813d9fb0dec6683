// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several line series.

use chart_core::{Chart, Series};

#[test]
fn autoscale_covers_every_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::line(vec![(1.0, 10.0), (2.0, 5.5), (4.0, 3.25)]));
    chart.add_series(Series::line(vec![(1.0, 10.0), (2.0, 2.9), (4.0, 1.6)]));

    chart.autoscale_axes(0.0);

    assert!((chart.x_axis.min - 1.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 4.0).abs() < 1e-9);
    assert!((chart.y_axis.min - 1.6).abs() < 1e-9);
    assert!((chart.y_axis.max - 10.0).abs() < 1e-9);
}

#[test]
fn autoscale_keeps_axis_labels() {
    let mut chart = Chart::new();
    chart.x_axis = chart_core::Axis::labeled("Number of Threads");
    chart.add_series(Series::line(vec![(1.0, 1.0), (8.0, 2.0)]));
    chart.autoscale_axes(0.05);
    assert_eq!(chart.x_axis.label, "Number of Threads");
    assert!(chart.x_axis.min < 1.0 && chart.x_axis.max > 8.0);
}

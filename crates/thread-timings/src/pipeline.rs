// File: crates/thread-timings/src/pipeline.rs
// Summary: Load, sort, project, render and persist in one straight-line pass.

use chart_core::Chart;
use tracing::{debug, info};

use crate::config::PlotConfig;
use crate::error::Result;
use crate::figure::{build_chart, render_options};
use crate::load::load_series;
use crate::measurement::RunMode;
use crate::projection::Projection;

/// What a successful run produced, kept for display and inspection.
#[derive(Clone, Debug)]
pub struct PlotRun {
    pub projection: Projection,
    pub chart: Chart,
}

/// Read both inputs, build the chart and write it to `config.output_path`.
/// Both files are fully parsed before anything is rendered, so a load or
/// parse failure leaves the output path untouched.
pub fn run(config: &PlotConfig) -> Result<PlotRun> {
    let mut single = load_series(&config.single_path, RunMode::SingleThreaded)?;
    let mut multi = load_series(&config.multi_path, RunMode::Multithreaded)?;
    info!(single = single.len(), multi = multi.len(), "loaded measurements");

    single.sort_by_threads();
    multi.sort_by_threads();
    debug!(single = ?single.thread_range(), multi = ?multi.thread_range(), "sorted by thread count");

    let projection = Projection::from_series(single, multi);
    let chart = build_chart(&projection)?;
    chart.render_to_png(&render_options(), &config.output_path)?;
    info!(path = %config.output_path.display(), "wrote chart");

    Ok(PlotRun { projection, chart })
}

/// Show the chart in a window until it is closed.
#[cfg(feature = "viewer")]
pub fn display(chart: &Chart) -> std::result::Result<(), chart_window::ViewerError> {
    info!("opening chart window; close it to exit");
    chart_window::show(chart, &render_options(), crate::figure::TITLE)
}

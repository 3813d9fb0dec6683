// File: crates/thread-timings/src/main.rs
// Summary: CLI that renders execution time vs. thread count to a PNG and shows it.

use anyhow::{Context, Result};
use chart_core::Chart;
use clap::Parser;
use thread_timings::{logging, pipeline, Args, PlotConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    let config = PlotConfig::from(&args);

    let run = pipeline::run(&config).with_context(|| {
        format!(
            "failed to plot {} and {}",
            config.single_path.display(),
            config.multi_path.display()
        )
    })?;
    println!("Wrote {}", config.output_path.display());

    if config.show {
        show(&run.chart)?;
    }
    Ok(())
}

#[cfg(feature = "viewer")]
fn show(chart: &Chart) -> Result<()> {
    pipeline::display(chart).context("failed to display chart")
}

#[cfg(not(feature = "viewer"))]
fn show(_chart: &Chart) -> Result<()> {
    tracing::warn!("built without the `viewer` feature; not opening a window");
    Ok(())
}

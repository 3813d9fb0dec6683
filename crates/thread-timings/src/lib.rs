// File: crates/thread-timings/src/lib.rs
// Summary: Library entry point; measurement loading and the thread-timings chart pipeline.

pub mod config;
pub mod error;
pub mod figure;
pub mod load;
pub mod logging;
pub mod measurement;
pub mod pipeline;
pub mod projection;

pub use config::{Args, PlotConfig};
pub use error::{ParseErrorKind, PlotError};
pub use load::{load_series, parse_line, parse_series};
pub use measurement::{Measurement, RunMode, TimingSeries};
pub use pipeline::{run, PlotRun};
pub use projection::Projection;

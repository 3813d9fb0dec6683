// File: crates/thread-timings/src/logging.rs
// Summary: tracing subscriber setup for the binary (stderr, env-filter).

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Default level for a `-v` count: info, debug, then trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` directives take precedence over
/// the verbosity default. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// File: crates/thread-timings/src/load.rs
// Summary: Reads `<threads> <seconds>` measurement files into timing series.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::NonZeroU32;
use std::path::Path;

use tracing::debug;

use crate::error::{ParseErrorKind, PlotError, Result};
use crate::measurement::{Measurement, RunMode, TimingSeries};

/// Parse one record: exactly two whitespace-separated tokens, a positive
/// integer thread count followed by a floating-point number of seconds.
pub fn parse_line(line: &str) -> std::result::Result<Measurement, ParseErrorKind> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[threads, seconds] = tokens.as_slice() else {
        return Err(ParseErrorKind::TokenCount { found: tokens.len() });
    };
    let threads = threads
        .parse::<NonZeroU32>()
        .map_err(|source| ParseErrorKind::ThreadCount { token: threads.to_string(), source })?
        .get();
    let seconds = seconds
        .parse::<f64>()
        .map_err(|source| ParseErrorKind::Seconds { token: seconds.to_string(), source })?;
    Ok(Measurement::new(threads, seconds))
}

/// Read every record from `reader`. Whitespace-only lines are skipped; any
/// other malformed line, including one that is not UTF-8, aborts with its
/// 1-based line number. `origin` only labels errors.
pub fn read_series<R: BufRead>(reader: R, mode: RunMode, origin: &Path) -> Result<TimingSeries> {
    let mut series = TimingSeries::new(mode);
    for (idx, line) in reader.lines().enumerate() {
        let parse_err = |kind| PlotError::Parse { origin: origin.to_path_buf(), line: idx + 1, kind };
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => return Err(parse_err(ParseErrorKind::Encoding)),
            Err(source) => return Err(PlotError::NotFound { path: origin.to_path_buf(), source }),
        };
        if line.trim().is_empty() {
            continue;
        }
        let m = parse_line(&line).map_err(parse_err)?;
        series.push(m);
    }
    Ok(series)
}

/// In-memory variant of [`load_series`].
pub fn parse_series(text: &str, mode: RunMode, origin: &Path) -> Result<TimingSeries> {
    read_series(text.as_bytes(), mode, origin)
}

/// Load the measurement file at `path` for `mode`.
pub fn load_series(path: impl AsRef<Path>, mode: RunMode) -> Result<TimingSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlotError::NotFound { path: path.to_path_buf(), source })?;
    let series = read_series(BufReader::new(file), mode, path)?;
    debug!(path = %path.display(), %mode, records = series.len(), "loaded measurements");
    Ok(series)
}

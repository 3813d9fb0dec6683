// File: crates/thread-timings/src/error.rs
// Summary: Error taxonomy for loading measurements and producing the chart.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use chart_core::RenderError;
use thiserror::Error;

/// Why a single input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected 2 whitespace-separated fields, found {found}")]
    TokenCount { found: usize },

    #[error("invalid thread count {token:?}")]
    ThreadCount {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid elapsed seconds {token:?}")]
    Seconds {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line is not valid UTF-8")]
    Encoding,
}

#[derive(Debug, Error)]
pub enum PlotError {
    /// Input file is missing or cannot be opened or read.
    #[error("cannot read {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based.
    #[error("{}:{line}: malformed measurement", origin.display())]
    Parse {
        origin: PathBuf,
        line: usize,
        #[source]
        kind: ParseErrorKind,
    },

    #[error("failed to render chart")]
    Render(#[from] RenderError),
}

impl PlotError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

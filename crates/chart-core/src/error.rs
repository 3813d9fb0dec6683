// File: crates/chart-core/src/error.rs
// Summary: Error type for chart construction and rendering.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("PNG encoding failed")]
    Encode(#[from] image::ImageError),

    /// X and Y columns handed to a line series differ in length.
    #[error("series '{label}': x and y must have the same length (got {x_len} and {y_len})")]
    SeriesLength { label: String, x_len: usize, y_len: usize },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;

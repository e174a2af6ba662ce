// src/error.rs

use thiserror::Error;

/// Engine-level failures. Unreadable frames and mismatched headers are
/// *not* errors: frames are skipped during the scan and headers are
/// repaired with a synthetic one (see `Matrix::synthetic_header`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// No strategy produced a single row in any accessible document.
    /// Fatal for the call; nothing is written.
    #[error("no table, grid or row markup found in any scannable document")]
    NotFound,

    /// Fixed-block-compress was asked to discard columns with a stride
    /// that cannot be correct for the matrix width. The engine never
    /// drops data on an unvalidated stride.
    #[error("block compress stride {stride} out of range for width {width}")]
    BadStride { stride: usize, width: usize },
}

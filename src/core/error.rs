//! Error types for the puzzle engine.
//!
//! Only constructor contract violations and session codec failures surface as
//! errors. Expected negative outcomes during play (nothing left to undo, a
//! rotation aimed at an invalid anchor, revealing outside surrender mode) are
//! ordinary `bool`/`Option` results the caller branches on.

use thiserror::Error;

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Errors produced by the puzzle engine.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The requested grid is too small to contain a single 2×2 block.
    #[error("grid dimensions {rows}x{cols} are below the 2x2 minimum")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Encoding or decoding a saved session failed.
    #[error("session encode/decode failed: {0}")]
    Codec(#[from] bincode::Error),
}

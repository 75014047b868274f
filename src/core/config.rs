//! Puzzle configuration: dimensions and scramble depth.
//!
//! Hosts describe the puzzle they want via [`PuzzleConfig`] and then `build`
//! it with a seed. The constants are the knobs a host UI typically exposes:
//! a 3×3 default board and a scramble-depth picker running 1–20 with a
//! default of 5. The depth range is advisory for hosts; the engine itself
//! accepts any depth, including 0 (which yields an already-solved grid).

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::engine::PuzzleEngine;

/// Default rows and columns for the convenience constructor.
pub const DEFAULT_GRID_SIZE: usize = 3;

/// Default number of scrambling rotations.
pub const DEFAULT_SCRAMBLE_DEPTH: usize = 5;

/// Lowest scramble depth the host picker should offer.
pub const MIN_SCRAMBLE_DEPTH: usize = 1;

/// Highest scramble depth the host picker should offer.
pub const MAX_SCRAMBLE_DEPTH: usize = 20;

/// Description of a puzzle to construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of rows (minimum 2).
    pub rows: usize,
    /// Number of columns (minimum 2).
    pub cols: usize,
    /// Number of random rotations applied at construction.
    pub scramble_depth: usize,
}

impl PuzzleConfig {
    /// Create a configuration with the default scramble depth.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            scramble_depth: DEFAULT_SCRAMBLE_DEPTH,
        }
    }

    /// Set the scramble depth.
    #[must_use]
    pub fn with_scramble_depth(mut self, depth: usize) -> Self {
        self.scramble_depth = depth;
        self
    }

    /// Check the constructor preconditions without building.
    ///
    /// Fails with [`PuzzleError::InvalidDimensions`](super::PuzzleError) when
    /// either dimension is below 2; a smaller grid has no valid anchor.
    pub fn validate(&self) -> Result<()> {
        PuzzleEngine::validate_dimensions(self.rows, self.cols)
    }

    /// Build a scrambled engine from this configuration.
    pub fn build(self, seed: u64) -> Result<PuzzleEngine> {
        PuzzleEngine::new(self.rows, self.cols, self.scramble_depth, seed)
    }
}

impl Default for PuzzleConfig {
    /// A 3×3 grid scrambled with 5 rotations.
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
    }
}

//! Core puzzle types: grid, anchors, directions, RNG, configuration, errors.
//!
//! Everything here is a plain value type; the state machine lives in
//! [`crate::engine`].

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{
    PuzzleConfig, DEFAULT_GRID_SIZE, DEFAULT_SCRAMBLE_DEPTH, MAX_SCRAMBLE_DEPTH,
    MIN_SCRAMBLE_DEPTH,
};
pub use error::{PuzzleError, Result};
pub use grid::{Anchor, Direction, Grid};
pub use rng::{PuzzleRng, PuzzleRngState};

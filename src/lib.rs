//! # revolve
//!
//! State engine for a rotation-based tile puzzle: a rows×cols grid holds the
//! integers `1..=rows*cols`, the player rotates 2×2 blocks a quarter turn at
//! a time, and the puzzle is solved when the values read in ascending
//! row-major order.
//!
//! ## Design Principles
//!
//! 1. **Reversible by construction**: puzzles are generated by scrambling a
//!    solved grid with recorded random rotations, so every puzzle is solvable
//!    and "surrender" can deterministically walk back to the solution.
//!
//! 2. **Two-tier undo**: ordinary undo pops grid snapshots taken before each
//!    player move; surrender mode extends the same `undo()` past the player
//!    history into the scramble sequence.
//!
//! 3. **Deterministic**: the entropy source is an explicit seeded RNG. The
//!    same dimensions, depth, and seed always produce the same puzzle.
//!
//! 4. **No shared mutable state**: every accessor returns an independent
//!    copy; nothing hands out a live view of the grid.
//!
//! ## Modules
//!
//! - `core`: grid, anchors, directions, RNG, configuration, errors
//! - `engine`: the `PuzzleEngine` state machine and its undo history
//! - `milestones`: completion events and in-memory milestone bookkeeping
//!
//! ## Example
//!
//! ```
//! use revolve::{Anchor, PuzzleConfig};
//!
//! let mut engine = PuzzleConfig::new(3, 3).with_scramble_depth(5).build(42)?;
//! assert!(engine.grid().is_permutation());
//!
//! // A rotation and its inverse cancel out.
//! let before = engine.grid();
//! engine.rotate_clockwise(Anchor::new(0, 0));
//! engine.rotate_counter_clockwise(Anchor::new(0, 0));
//! assert_eq!(engine.grid(), before);
//! # Ok::<(), revolve::PuzzleError>(())
//! ```

pub mod core;
pub mod engine;
pub mod milestones;

// Re-export commonly used types
pub use crate::core::{
    Anchor, Direction, Grid, PuzzleConfig, PuzzleError, PuzzleRng, PuzzleRngState, Result,
    DEFAULT_GRID_SIZE, DEFAULT_SCRAMBLE_DEPTH, MAX_SCRAMBLE_DEPTH, MIN_SCRAMBLE_DEPTH,
};

pub use crate::engine::{history::MoveRecord, PuzzleEngine};

pub use crate::milestones::{
    CompletionEvent, MilestoneTracker, EXPERT_DEPTH, HARD_DEPTH, MILESTONE_COUNT,
    TRACKED_GRID_SIZES, WIN_TIERS,
};

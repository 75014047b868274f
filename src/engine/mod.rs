//! The puzzle engine: construction, scrambling, rotations, two-tier undo.
//!
//! One [`PuzzleEngine`] owns one grid plus its history for the lifetime of a
//! session. Control flow: construct (scrambled) → player rotates, history
//! records, solved check → optionally enter surrender mode → undo walks back
//! through player moves and then, in surrender mode only, through the
//! scramble sequence until the solved grid reappears.
//!
//! The engine is single-threaded and synchronous. Every operation completes
//! before returning and either fully applies or is a no-op; multi-threaded
//! hosts must funnel all calls through one serialization point.

pub mod history;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Anchor, Direction, Grid, PuzzleConfig, PuzzleError, PuzzleRng, Result};
use crate::milestones::CompletionEvent;
use history::{History, MoveRecord};

/// State engine for one rotation-puzzle session.
///
/// ## Example
///
/// ```
/// use revolve::{Anchor, PuzzleEngine};
///
/// let mut engine = PuzzleEngine::new(3, 3, 5, 42)?;
/// assert_eq!(engine.remaining_scramble_moves(), 5);
///
/// engine.rotate_clockwise(Anchor::new(0, 0));
/// assert!(engine.undo());
///
/// engine.enable_surrender_mode();
/// assert_eq!(engine.reveal_full_solution(), Some(5));
/// assert!(engine.is_solved());
/// # Ok::<(), revolve::PuzzleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleEngine {
    grid: Grid,
    history: History,
    surrender_mode: bool,
    rng: PuzzleRng,
    scramble_depth: usize,
    completion_emitted: bool,
}

impl PuzzleEngine {
    /// Create a scrambled puzzle.
    ///
    /// The grid starts in solved order and is then scrambled by
    /// `scramble_depth` random rotations, each recorded for surrender-mode
    /// undo. A depth of 0 yields an already-solved grid. Identical arguments
    /// (including `seed`) always produce the identical puzzle.
    ///
    /// ## Errors
    ///
    /// [`PuzzleError::InvalidDimensions`] when either dimension is below 2:
    /// such a grid has no valid anchor to rotate.
    pub fn new(rows: usize, cols: usize, scramble_depth: usize, seed: u64) -> Result<Self> {
        Self::validate_dimensions(rows, cols)?;
        Ok(Self::build(rows, cols, scramble_depth, seed))
    }

    /// Create a scrambled puzzle on the default 3×3 grid.
    pub fn with_default_size(scramble_depth: usize, seed: u64) -> Self {
        Self::build(
            crate::core::DEFAULT_GRID_SIZE,
            crate::core::DEFAULT_GRID_SIZE,
            scramble_depth,
            seed,
        )
    }

    /// Create a scrambled puzzle from a [`PuzzleConfig`].
    pub fn with_config(config: PuzzleConfig, seed: u64) -> Result<Self> {
        Self::new(config.rows, config.cols, config.scramble_depth, seed)
    }

    /// Check the dimension precondition shared by all constructors.
    pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
        if rows < 2 || cols < 2 {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    /// Construct and scramble. Dimensions are already validated.
    fn build(rows: usize, cols: usize, scramble_depth: usize, seed: u64) -> Self {
        let mut engine = Self {
            grid: Grid::solved(rows, cols),
            history: History::new(),
            surrender_mode: false,
            rng: PuzzleRng::new(seed),
            scramble_depth,
            completion_emitted: false,
        };
        engine.scramble(scramble_depth);
        debug!("created {rows}x{cols} puzzle, scramble depth {scramble_depth}, seed {seed}");
        engine
    }

    /// Apply `depth` random rotations, recording each on the scramble stack.
    ///
    /// Scramble moves never touch the player history: they are not undoable
    /// through ordinary undo, only in surrender mode.
    fn scramble(&mut self, depth: usize) {
        for _ in 0..depth {
            let anchor = Anchor::new(
                self.rng.gen_index(self.grid.rows() - 1),
                self.rng.gen_index(self.grid.cols() - 1),
            );
            let direction = if self.rng.gen_bool(0.5) {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            self.grid.rotate(anchor, direction);
            self.history.push_scramble(MoveRecord::new(anchor, direction));
        }
    }

    // === Queries ===

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The scramble depth this puzzle was constructed with.
    #[must_use]
    pub fn scramble_depth(&self) -> usize {
        self.scramble_depth
    }

    /// An independent snapshot of the current grid.
    ///
    /// Mutating the returned grid never affects engine state.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid.clone()
    }

    /// Value at a cell, or `None` if out of bounds.
    #[must_use]
    pub fn value_at(&self, row: usize, col: usize) -> Option<u32> {
        self.grid.value_at(row, col)
    }

    /// True iff the grid reads `1, 2, ..., rows*cols` in row-major order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Whether surrender mode has been enabled this session.
    #[must_use]
    pub fn is_surrender_mode(&self) -> bool {
        self.surrender_mode
    }

    // === Rotations ===

    /// Rotate the 2×2 block at `anchor` clockwise.
    ///
    /// Returns whether a rotation was applied. An invalid anchor is silently
    /// ignored (no state change, no history push) so hosts can debounce
    /// stray input without branching.
    pub fn rotate_clockwise(&mut self, anchor: Anchor) -> bool {
        self.rotate(anchor, Direction::Clockwise)
    }

    /// Rotate the 2×2 block at `anchor` counter-clockwise.
    ///
    /// Returns whether a rotation was applied; see [`Self::rotate_clockwise`].
    pub fn rotate_counter_clockwise(&mut self, anchor: Anchor) -> bool {
        self.rotate(anchor, Direction::CounterClockwise)
    }

    fn rotate(&mut self, anchor: Anchor, direction: Direction) -> bool {
        if !self.grid.is_valid_anchor(anchor) {
            trace!("ignoring rotation at invalid anchor {anchor}");
            return false;
        }
        self.history.push_snapshot(self.grid.snapshot());
        self.grid.rotate(anchor, direction);
        true
    }

    // === Undo / surrender ===

    /// Enable surrender mode. One-way and idempotent: once enabled it stays
    /// enabled for the rest of the session.
    pub fn enable_surrender_mode(&mut self) {
        if !self.surrender_mode {
            debug!(
                "surrender mode enabled, {} scramble moves reversible",
                self.history.scramble_count()
            );
        }
        self.surrender_mode = true;
    }

    /// Undo the most recent reversible step.
    ///
    /// Player moves are undone first by restoring the snapshot taken before
    /// them. When the player history is exhausted and surrender mode is
    /// active, the newest scramble move is consumed instead and its inverse
    /// rotation applied. Returns `false` when there is nothing to undo; that
    /// is an expected outcome, not an error.
    pub fn undo(&mut self) -> bool {
        if let Some(cells) = self.history.pop_snapshot() {
            self.grid.restore(cells);
            return true;
        }
        if self.surrender_mode {
            if let Some(record) = self.history.pop_scramble() {
                self.grid.rotate(record.anchor, record.direction.inverse());
                return true;
            }
        }
        false
    }

    /// Whether [`Self::undo`] would succeed right now.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.snapshot_count() > 0
            || (self.surrender_mode && self.history.scramble_count() > 0)
    }

    /// Count of remaining reversible steps.
    ///
    /// Player moves only in normal mode; player moves plus scramble moves in
    /// surrender mode. Both tiers are reached through the one [`Self::undo`]
    /// entry point, so this is exactly the number of times `undo` will
    /// return `true`.
    #[must_use]
    pub fn remaining_undos(&self) -> usize {
        if self.surrender_mode {
            self.history.snapshot_count() + self.history.scramble_count()
        } else {
            self.history.snapshot_count()
        }
    }

    /// Number of scramble moves not yet consumed by surrender-mode undo.
    #[must_use]
    pub fn remaining_scramble_moves(&self) -> usize {
        self.history.scramble_count()
    }

    /// Undo everything, restoring the solved grid.
    ///
    /// Only valid in surrender mode; returns `None` otherwise without
    /// touching any state. On success returns the number of undos performed.
    /// The scramble stack holds the construction moves in application order,
    /// so unwinding it top-to-bottom deterministically lands on the solved
    /// grid regardless of depth.
    pub fn reveal_full_solution(&mut self) -> Option<usize> {
        if !self.surrender_mode {
            return None;
        }

        let mut undone = 0;
        while self.undo() {
            undone += 1;
        }
        debug!("revealed solution after {undone} undos");
        Some(undone)
    }

    // === Completion ===

    /// Emit the completion event for this session, at most once.
    ///
    /// Returns `Some` the first time it is called with the grid solved, and
    /// `None` thereafter (or while unsolved). Wins reached in surrender mode
    /// are suppressed entirely: the session still counts as emitted, but no
    /// event is produced, so milestone bookkeeping never credits a revealed
    /// solution.
    pub fn take_completion_event(&mut self) -> Option<CompletionEvent> {
        if !self.grid.is_solved() || self.completion_emitted {
            return None;
        }
        self.completion_emitted = true;
        if self.surrender_mode {
            debug!("win in surrender mode, completion event suppressed");
            return None;
        }
        Some(CompletionEvent {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            scramble_depth: self.scramble_depth,
        })
    }

    // === Session persistence ===

    /// Serialize the whole session (grid, histories, mode, RNG) to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a session previously captured with [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

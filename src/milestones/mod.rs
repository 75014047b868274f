//! In-memory milestone bookkeeping for completed puzzles.
//!
//! The engine emits one [`CompletionEvent`] per genuinely won session (see
//! [`PuzzleEngine::take_completion_event`](crate::PuzzleEngine::take_completion_event));
//! a host feeds those events into a [`MilestoneTracker`] and renders the
//! results however it likes. The tracker is pure bookkeeping: no persistence,
//! no clock, no UI. Hosts that persist milestones serialize the tracker with
//! serde and own the storage format.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Grid sizes that count toward the "all grid sizes" milestone.
pub const TRACKED_GRID_SIZES: [(usize, usize); 3] = [(3, 3), (3, 4), (4, 4)];

/// Scramble depth at which a win counts as a hard-puzzle completion.
pub const HARD_DEPTH: usize = 10;

/// Scramble depth at which a win counts as an expert-puzzle completion.
pub const EXPERT_DEPTH: usize = 15;

/// Win-count milestone tiers.
pub const WIN_TIERS: [u32; 3] = [10, 25, 50];

/// Total number of distinct milestones: one per tracked grid size, the two
/// difficulty thresholds, the three win tiers, and one for completing every
/// tracked grid size.
pub const MILESTONE_COUNT: usize = TRACKED_GRID_SIZES.len() + 2 + WIN_TIERS.len() + 1;

/// One solved session, keyed the way milestone bookkeeping needs it.
///
/// Emitted at most once per session, and never for wins reached in
/// surrender mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// Rows of the solved grid.
    pub rows: usize,
    /// Columns of the solved grid.
    pub cols: usize,
    /// Scramble depth the puzzle was constructed with.
    pub scramble_depth: usize,
}

/// Accumulates completion events and answers milestone queries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MilestoneTracker {
    total_wins: u32,
    completed_sizes: FxHashSet<(usize, usize)>,
    completed_depths: FxHashSet<usize>,
}

impl MilestoneTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed puzzle.
    pub fn record(&mut self, event: CompletionEvent) {
        self.total_wins += 1;
        self.completed_sizes.insert((event.rows, event.cols));
        self.completed_depths.insert(event.scramble_depth);
    }

    /// Total number of puzzles won.
    #[must_use]
    pub fn total_wins(&self) -> u32 {
        self.total_wins
    }

    /// Whether a puzzle of exactly this size has been completed.
    #[must_use]
    pub fn has_completed_grid_size(&self, rows: usize, cols: usize) -> bool {
        self.completed_sizes.contains(&(rows, cols))
    }

    /// Whether every tracked grid size has been completed.
    #[must_use]
    pub fn has_completed_all_grid_sizes(&self) -> bool {
        TRACKED_GRID_SIZES
            .iter()
            .all(|&(rows, cols)| self.has_completed_grid_size(rows, cols))
    }

    /// Whether any completed puzzle had at least the given scramble depth.
    #[must_use]
    pub fn has_completed_depth_at_least(&self, min_depth: usize) -> bool {
        self.completed_depths.iter().any(|&depth| depth >= min_depth)
    }

    /// Whether a puzzle with scramble depth ≥ [`HARD_DEPTH`] has been won.
    #[must_use]
    pub fn has_completed_hard_puzzle(&self) -> bool {
        self.has_completed_depth_at_least(HARD_DEPTH)
    }

    /// Whether a puzzle with scramble depth ≥ [`EXPERT_DEPTH`] has been won.
    #[must_use]
    pub fn has_completed_expert_puzzle(&self) -> bool {
        self.has_completed_depth_at_least(EXPERT_DEPTH)
    }

    /// Whether at least `count` puzzles have been won.
    #[must_use]
    pub fn has_won_at_least(&self, count: u32) -> bool {
        self.total_wins >= count
    }

    /// Number of milestones achieved, out of [`MILESTONE_COUNT`].
    ///
    /// Completing every tracked grid size counts as its own milestone on
    /// top of the per-size ones.
    #[must_use]
    pub fn total_milestones_achieved(&self) -> usize {
        let mut achieved = 0;

        for &(rows, cols) in &TRACKED_GRID_SIZES {
            if self.has_completed_grid_size(rows, cols) {
                achieved += 1;
            }
        }
        if self.has_completed_hard_puzzle() {
            achieved += 1;
        }
        if self.has_completed_expert_puzzle() {
            achieved += 1;
        }
        for &tier in &WIN_TIERS {
            if self.has_won_at_least(tier) {
                achieved += 1;
            }
        }
        if self.has_completed_all_grid_sizes() {
            achieved += 1;
        }

        achieved
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

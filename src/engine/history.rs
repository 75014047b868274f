//! Two-tier undo history.
//!
//! The player tier stores whole-grid snapshots, one pushed immediately before
//! each player rotation; popping one replaces the grid wholesale. The
//! scramble tier stores compact [`MoveRecord`]s in the order they were
//! applied at construction time; popping one yields the move whose inverse
//! walks the grid back toward the solved state.
//!
//! Snapshot-based player undo is the representation the engine commits to:
//! it is trivially correct (no inverse bookkeeping), and with `im::Vector`
//! snapshots each entry costs structural sharing rather than a full copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Anchor, Direction};

/// One recorded rotation: an anchor plus a direction.
///
/// Immutable once created. Only the scramble tier stores these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Top-left corner of the rotated block.
    pub anchor: Anchor,
    /// Direction the block was turned.
    pub direction: Direction,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(anchor: Anchor, direction: Direction) -> Self {
        Self { anchor, direction }
    }
}

/// The two ordered stacks backing undo. Newest entries on top (end).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct History {
    /// Grid snapshots pushed before each player rotation.
    snapshots: Vec<Vector<u32>>,
    /// Moves applied while scrambling, in application order.
    scramble: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_snapshot(&mut self, cells: Vector<u32>) {
        self.snapshots.push(cells);
    }

    pub fn pop_snapshot(&mut self) -> Option<Vector<u32>> {
        self.snapshots.pop()
    }

    pub fn push_scramble(&mut self, record: MoveRecord) {
        self.scramble.push(record);
    }

    pub fn pop_scramble(&mut self) -> Option<MoveRecord> {
        self.scramble.pop()
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn scramble_count(&self) -> usize {
        self.scramble.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row: usize, col: usize, direction: Direction) -> MoveRecord {
        MoveRecord::new(Anchor::new(row, col), direction)
    }

    #[test]
    fn test_snapshots_pop_newest_first() {
        let mut history = History::new();
        let first: Vector<u32> = Vector::from(vec![1, 2, 3, 4]);
        let second: Vector<u32> = Vector::from(vec![3, 1, 4, 2]);

        history.push_snapshot(first.clone());
        history.push_snapshot(second.clone());

        assert_eq!(history.snapshot_count(), 2);
        assert_eq!(history.pop_snapshot(), Some(second));
        assert_eq!(history.pop_snapshot(), Some(first));
        assert_eq!(history.pop_snapshot(), None);
    }

    #[test]
    fn test_scramble_pops_in_reverse_application_order() {
        let mut history = History::new();
        history.push_scramble(record(0, 0, Direction::Clockwise));
        history.push_scramble(record(1, 1, Direction::CounterClockwise));

        assert_eq!(history.scramble_count(), 2);
        assert_eq!(
            history.pop_scramble(),
            Some(record(1, 1, Direction::CounterClockwise))
        );
        assert_eq!(history.pop_scramble(), Some(record(0, 0, Direction::Clockwise)));
        assert_eq!(history.pop_scramble(), None);
    }

    #[test]
    fn test_tiers_are_independent() {
        let mut history = History::new();
        history.push_snapshot(Vector::from(vec![1, 2, 3, 4]));
        history.push_scramble(record(0, 0, Direction::Clockwise));

        assert!(history.pop_snapshot().is_some());
        assert_eq!(history.scramble_count(), 1);
    }
}

//! Grid model: the rows×cols permutation container and the 2×2 quarter-turn.
//!
//! A [`Grid`] always holds the integers `1..=rows*cols`, each exactly once.
//! The only mutation it supports is rotating the four cells of a 2×2 block
//! (identified by its top-left [`Anchor`]) one quarter turn, which is a
//! bijection on cell values, so the permutation invariant is preserved by
//! construction.
//!
//! Cells live in an `im::Vector`, so cloning a grid (or capturing an undo
//! snapshot) is O(1) with structural sharing.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-left coordinate of a 2×2 rotation target.
///
/// Valid iff `row < rows - 1` and `col < cols - 1`; see
/// [`Grid::is_valid_anchor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    /// Top row of the 2×2 block.
    pub row: usize,
    /// Left column of the 2×2 block.
    pub col: usize,
}

impl Anchor {
    /// Create a new anchor.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rotation direction for a 2×2 block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Quarter turn to the right.
    Clockwise,
    /// Quarter turn to the left.
    CounterClockwise,
}

impl Direction {
    /// The direction that undoes a rotation in this direction.
    ///
    /// `rotate(a, d)` followed by `rotate(a, d.inverse())` restores the grid.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// The puzzle matrix: a permutation of `1..=rows*cols` in row-major order.
///
/// Solved order is ascending: `1, 2, ..., rows*cols`. Grids are owned values;
/// a `clone()` is fully independent of the original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell values.
    cells: Vector<u32>,
}

impl Grid {
    /// Create a grid in solved order (`1..=rows*cols`, row-major).
    ///
    /// Callers validate dimensions; the engine constructor rejects anything
    /// below 2×2 before reaching this point.
    pub(crate) fn solved(rows: usize, cols: usize) -> Self {
        let cells = (1..=(rows * cols) as u32).collect();
        Self { rows, cols, cells }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the value at a cell, or `None` if out of bounds.
    #[must_use]
    pub fn value_at(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Check whether `anchor` is a valid top-left corner for a 2×2 block.
    #[must_use]
    pub fn is_valid_anchor(&self, anchor: Anchor) -> bool {
        anchor.row < self.rows - 1 && anchor.col < self.cols - 1
    }

    /// Iterate over every valid anchor in row-major order.
    pub fn anchors(&self) -> impl Iterator<Item = Anchor> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows - 1).flat_map(move |row| (0..cols - 1).map(move |col| Anchor::new(row, col)))
    }

    /// Rotate the 2×2 block at `anchor` one quarter turn.
    ///
    /// The anchor must already be validated by the caller.
    pub(crate) fn rotate(&mut self, anchor: Anchor, direction: Direction) {
        let tl = self.index(anchor.row, anchor.col);
        let tr = self.index(anchor.row, anchor.col + 1);
        let bl = self.index(anchor.row + 1, anchor.col);
        let br = self.index(anchor.row + 1, anchor.col + 1);

        let (tl_val, tr_val, bl_val, br_val) =
            (self.cells[tl], self.cells[tr], self.cells[bl], self.cells[br]);

        match direction {
            Direction::Clockwise => {
                self.cells.set(tl, bl_val);
                self.cells.set(bl, br_val);
                self.cells.set(br, tr_val);
                self.cells.set(tr, tl_val);
            }
            Direction::CounterClockwise => {
                self.cells.set(tl, tr_val);
                self.cells.set(tr, br_val);
                self.cells.set(br, bl_val);
                self.cells.set(bl, tl_val);
            }
        }

        debug_assert!(self.is_permutation(), "rotation broke the permutation invariant");
    }

    /// True iff the grid reads `1, 2, ..., rows*cols` in row-major order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &value)| value == i as u32 + 1)
    }

    /// True iff every value in `1..=rows*cols` appears exactly once.
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let len = self.rows * self.cols;
        let mut seen = vec![false; len];
        for &value in &self.cells {
            if value == 0 {
                return false;
            }
            let Some(slot) = seen.get_mut(value as usize - 1) else {
                return false;
            };
            if *slot {
                return false;
            }
            *slot = true;
        }
        self.cells.len() == len
    }

    /// Capture the cell values for the undo history. O(1) via `im`.
    pub(crate) fn snapshot(&self) -> Vector<u32> {
        self.cells.clone()
    }

    /// Replace the cell values with a previously captured snapshot.
    pub(crate) fn restore(&mut self, cells: Vector<u32>) {
        self.cells = cells;
    }

    /// Copy the grid out as rows of values, for hosts that want plain data.
    ///
    /// The returned vectors are fully detached from the grid.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.cells[self.index(row, col)])
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{:3}", self.cells[self.index(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

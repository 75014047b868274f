//! Property tests for the engine's core laws: the permutation invariant,
//! rotation inverses, undo exactness, and scramble reversibility.

use proptest::prelude::*;
use revolve::{Anchor, PuzzleEngine};

/// An arbitrary rotation request, valid or not, against grids up to 6x6.
fn any_request() -> impl Strategy<Value = (usize, usize, bool)> {
    (0usize..6, 0usize..6, any::<bool>())
}

proptest! {
    /// The grid is a permutation of 1..=rows*cols after any sequence of
    /// rotations (valid or invalid) and undos.
    #[test]
    fn prop_permutation_invariant(
        rows in 2usize..=5,
        cols in 2usize..=5,
        depth in 0usize..=25,
        seed: u64,
        requests in proptest::collection::vec(any_request(), 0..30),
        undos in 0usize..40,
    ) {
        let mut engine = PuzzleEngine::new(rows, cols, depth, seed).unwrap();
        prop_assert!(engine.grid().is_permutation());

        for (row, col, clockwise) in requests {
            let anchor = Anchor::new(row, col);
            if clockwise {
                engine.rotate_clockwise(anchor);
            } else {
                engine.rotate_counter_clockwise(anchor);
            }
            prop_assert!(engine.grid().is_permutation());
        }

        for _ in 0..undos {
            engine.undo();
            prop_assert!(engine.grid().is_permutation());
        }
    }

    /// rotate_clockwise followed by rotate_counter_clockwise at the same
    /// anchor restores the prior grid, from any reachable state.
    #[test]
    fn prop_rotation_inverse_law(
        rows in 2usize..=5,
        cols in 2usize..=5,
        depth in 0usize..=25,
        seed: u64,
        anchor_pick in any::<(usize, usize)>(),
    ) {
        let mut engine = PuzzleEngine::new(rows, cols, depth, seed).unwrap();
        let anchor = Anchor::new(anchor_pick.0 % (rows - 1), anchor_pick.1 % (cols - 1));
        let before = engine.grid();

        engine.rotate_clockwise(anchor);
        engine.rotate_counter_clockwise(anchor);
        prop_assert_eq!(engine.grid(), before.clone());

        engine.rotate_counter_clockwise(anchor);
        engine.rotate_clockwise(anchor);
        prop_assert_eq!(engine.grid(), before);
    }

    /// N applied rotations followed by N undos restore the pre-rotation
    /// grid, and nothing is undoable afterward in normal mode.
    #[test]
    fn prop_undo_exactness(
        rows in 2usize..=5,
        cols in 2usize..=5,
        depth in 0usize..=25,
        seed: u64,
        requests in proptest::collection::vec(any_request(), 0..25),
    ) {
        let mut engine = PuzzleEngine::new(rows, cols, depth, seed).unwrap();
        let before = engine.grid();

        let mut applied = 0;
        for (row, col, clockwise) in requests {
            let anchor = Anchor::new(row, col);
            let turned = if clockwise {
                engine.rotate_clockwise(anchor)
            } else {
                engine.rotate_counter_clockwise(anchor)
            };
            if turned {
                applied += 1;
            }
        }
        prop_assert_eq!(engine.remaining_undos(), applied);

        for _ in 0..applied {
            prop_assert!(engine.undo());
        }

        prop_assert_eq!(engine.grid(), before);
        prop_assert!(!engine.can_undo());
        prop_assert!(!engine.undo());
    }

    /// For any depth D, surrendering immediately after construction and
    /// revealing returns exactly D and leaves the grid solved.
    #[test]
    fn prop_scramble_reversibility(
        rows in 2usize..=5,
        cols in 2usize..=5,
        depth in 0usize..=40,
        seed: u64,
    ) {
        let mut engine = PuzzleEngine::new(rows, cols, depth, seed).unwrap();
        engine.enable_surrender_mode();

        prop_assert_eq!(engine.reveal_full_solution(), Some(depth));
        prop_assert!(engine.is_solved());
        prop_assert_eq!(engine.remaining_scramble_moves(), 0);
    }

    /// undo() returns true exactly remaining_undos() times, in either mode.
    #[test]
    fn prop_remaining_undos_counts_successes(
        depth in 0usize..=20,
        seed: u64,
        player_moves in 0usize..10,
        surrender: bool,
    ) {
        let mut engine = PuzzleEngine::new(3, 3, depth, seed).unwrap();
        for i in 0..player_moves {
            engine.rotate_clockwise(Anchor::new(i % 2, (i / 2) % 2));
        }
        if surrender {
            engine.enable_surrender_mode();
        }

        let expected = engine.remaining_undos();
        let mut successes = 0;
        while engine.undo() {
            successes += 1;
        }
        prop_assert_eq!(successes, expected);
        prop_assert!(!engine.can_undo());
    }

    /// A single quarter turn never leaves a solved grid solved: the four
    /// rotated values are distinct, so the cycle always moves something.
    #[test]
    fn prop_single_rotation_unsolves(
        rows in 2usize..=5,
        cols in 2usize..=5,
        anchor_pick in any::<(usize, usize)>(),
        clockwise: bool,
    ) {
        let mut engine = PuzzleEngine::new(rows, cols, 0, 0).unwrap();
        prop_assert!(engine.is_solved());

        let anchor = Anchor::new(anchor_pick.0 % (rows - 1), anchor_pick.1 % (cols - 1));
        if clockwise {
            engine.rotate_clockwise(anchor);
        } else {
            engine.rotate_counter_clockwise(anchor);
        }

        prop_assert!(!engine.is_solved());
    }
}

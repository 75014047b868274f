//! Engine-to-tracker wiring: completion events feed milestone bookkeeping.

use revolve::{Anchor, MilestoneTracker, PuzzleEngine};

/// Winning a puzzle emits one event; feeding it to the tracker records the
/// win under the session's grid size and depth.
#[test]
fn test_win_flows_into_tracker() {
    let mut tracker = MilestoneTracker::new();

    // Unscrambled puzzle: one rotation and its undo bring it back to solved.
    let mut engine = PuzzleEngine::new(3, 3, 0, 42).unwrap();
    engine.rotate_clockwise(Anchor::new(0, 0));
    engine.undo();
    assert!(engine.is_solved());

    if let Some(event) = engine.take_completion_event() {
        tracker.record(event);
    }

    assert_eq!(tracker.total_wins(), 1);
    assert!(tracker.has_completed_grid_size(3, 3));
}

/// Polling for the event repeatedly only credits the session once.
#[test]
fn test_event_emitted_once_per_session() {
    let mut tracker = MilestoneTracker::new();
    let mut engine = PuzzleEngine::new(3, 3, 0, 42).unwrap();

    for _ in 0..5 {
        if let Some(event) = engine.take_completion_event() {
            tracker.record(event);
        }
    }

    assert_eq!(tracker.total_wins(), 1);
}

/// Surrender wins are suppressed: revealing the solution never counts.
#[test]
fn test_surrender_win_not_credited() {
    let mut tracker = MilestoneTracker::new();
    let mut engine = PuzzleEngine::new(3, 3, 10, 42).unwrap();

    engine.enable_surrender_mode();
    engine.reveal_full_solution();
    assert!(engine.is_solved());

    if let Some(event) = engine.take_completion_event() {
        tracker.record(event);
    }

    assert_eq!(tracker.total_wins(), 0);
    assert!(!tracker.has_completed_hard_puzzle());
}

/// An unsolved session never emits.
#[test]
fn test_no_event_while_unsolved() {
    let mut engine = PuzzleEngine::new(3, 3, 5, 42).unwrap();

    assert!(!engine.is_solved());
    assert_eq!(engine.take_completion_event(), None);
}

/// Events carry the parameters milestone queries key on.
#[test]
fn test_event_carries_session_parameters() {
    let mut engine = PuzzleEngine::new(4, 4, 0, 42).unwrap();

    let event = engine.take_completion_event().unwrap();
    assert_eq!(event.rows, 4);
    assert_eq!(event.cols, 4);
    assert_eq!(event.scramble_depth, 0);

    let mut tracker = MilestoneTracker::new();
    tracker.record(event);
    assert!(tracker.has_completed_grid_size(4, 4));
    assert!(!tracker.has_completed_grid_size(3, 3));
}

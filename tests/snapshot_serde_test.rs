//! Snapshot serialization round-trip (only built with `--features serde`)
#![cfg(feature = "serde")]

use blockfall::core::{GameEngine, GameSnapshot};
use blockfall::types::RunState;

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut engine = GameEngine::new(12345);
    engine.move_right();
    engine.rotate();
    engine.hard_drop();

    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize");
    let back: GameSnapshot = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, snapshot);
    assert_eq!(back.state, RunState::Playing);
}

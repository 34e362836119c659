//! Save/load integration tests.
//!
//! Every test works in its own temporary directory.

use std::fs;

use fox_hound::core::{Dimension, Figure, GameState, PlayerSet};
use fox_hound::persist::{load_game, save_game};
use fox_hound::rules::initial_placement;
use fox_hound::GameError;

fn default_state() -> GameState {
    GameState::new(initial_placement(Dimension::DEFAULT))
}

fn midgame_state() -> GameState {
    let players = PlayerSet::from_labels(Dimension::DEFAULT, &["A2", "D1", "E2", "H1", "C6"]).unwrap();
    GameState::new(players).with_turn(Figure::Hound)
}

// =============================================================================
// Save
// =============================================================================

#[test]
fn test_save_writes_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");

    save_game(&midgame_state(), Dimension::DEFAULT, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "H A2 D1 E2 H1 C6\n");
}

#[test]
fn test_save_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    fs::write(&path, "keep me").unwrap();

    let err = save_game(&default_state(), Dimension::DEFAULT, &path).unwrap_err();
    assert!(matches!(err, GameError::Io(ref e) if e.kind() == std::io::ErrorKind::AlreadyExists));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
}

#[test]
fn test_save_rejects_non_default_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.txt");
    let dim = Dimension::new(6).unwrap();
    let state = GameState::new(initial_placement(dim));

    let err = save_game(&state, dim, &path).unwrap_err();
    assert!(matches!(err, GameError::UnsupportedConfiguration(_)));
    assert!(!path.exists());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("game.txt");
    assert!(matches!(
        save_game(&default_state(), Dimension::DEFAULT, &path),
        Err(GameError::Io(_))
    ));
}

// =============================================================================
// Load
// =============================================================================

#[test]
fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round_trip.txt");
    assert!(!path.exists());

    let state = midgame_state();
    save_game(&state, Dimension::DEFAULT, &path).unwrap();
    let loaded = load_game(&path, Dimension::DEFAULT).unwrap();

    assert_eq!(loaded, state);
    assert_eq!(loaded.turn, Figure::Hound);
    assert_eq!(loaded.players.labels(), vec!["A2", "D1", "E2", "H1", "C6"]);
}

#[test]
fn test_load_reads_first_line_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    fs::write(&path, "F B1 D1 F1 H1 E8 \nH garbage\n").unwrap();

    let loaded = load_game(&path, Dimension::DEFAULT).unwrap();
    assert_eq!(loaded, default_state());
}

#[test]
fn test_load_rejects_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    for (i, line) in ["", "# B1 D1 F1 H1 E8", "F B1 D1 F1 H1", "F B1 D1 F1 H1 Z9", "H B1 D1 F1 H1 E8 G7"]
        .iter()
        .enumerate()
    {
        let path = dir.path().join(format!("bad{i}.txt"));
        fs::write(&path, line).unwrap();
        assert!(
            matches!(load_game(&path, Dimension::DEFAULT), Err(GameError::Format(_))),
            "{line:?}"
        );
    }
}

#[test]
fn test_load_missing_file_fails_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    assert!(matches!(load_game(&path, Dimension::DEFAULT), Err(GameError::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_load_rejects_non_default_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    fs::write(&path, "F B1 D1 F1 H1 E8\n").unwrap();

    let err = load_game(&path, Dimension::new(10).unwrap()).unwrap_err();
    assert!(matches!(err, GameError::UnsupportedConfiguration(_)));
}

//! Save files: one line of text holding the side to move and every position.
//!
//! ## Format
//!
//! ```text
//! <T> <H1> <H2> <H3> <H4> <F>
//! ```
//!
//! `<T>` is `F` or `H` (the side to move next), followed by the four hound
//! labels in order and the fox label, space separated. Only the default 8×8
//! board can be saved or loaded; any other board fails with
//! `GameError::UnsupportedConfiguration`.
//!
//! Saving never overwrites: the target file must not exist yet.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashSet;

use crate::core::{Coord, Dimension, Figure, GameState, PlayerSet, DEFAULT_LENGTH};
use crate::error::{GameError, Result};

/// Turn marker plus exactly five default-board labels.
const LINE_PATTERN: &str = r"^[FH](\s[A-H][1-8]){5}$";

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LINE_PATTERN).expect("save line pattern is a valid regex"))
}

/// A game state in its persisted form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRecord {
    state: GameState,
}

impl SaveRecord {
    /// Wrap a default-board game state for saving.
    pub fn new(state: &GameState, dim: Dimension) -> Result<Self> {
        if !dim.is_default() || state.players.len() != DEFAULT_LENGTH {
            return Err(GameError::UnsupportedConfiguration(format!(
                "saving needs the default {} board with {DEFAULT_LENGTH} pieces, got {dim} with {}",
                Dimension::DEFAULT,
                state.players.len()
            )));
        }
        if let Some(off) = state.players.iter().find(|c| !c.is_on_board(Dimension::DEFAULT)) {
            return Err(GameError::UnsupportedConfiguration(format!(
                "position {off} is outside the default board"
            )));
        }

        Ok(Self {
            state: state.clone(),
        })
    }

    /// Parse a saved line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if !line_pattern().is_match(line) {
            return Err(GameError::Format(line.to_string()));
        }

        let mut tokens = line.split_whitespace();
        let turn = tokens
            .next()
            .and_then(|t| t.chars().next())
            .and_then(Figure::from_marker)
            .ok_or_else(|| GameError::Format(line.to_string()))?;
        let labels: Vec<&str> = tokens.collect();

        let players = PlayerSet::from_labels(Dimension::DEFAULT, &labels)?;
        let mut seen = FxHashSet::default();
        if !players.iter().all(|c: Coord| seen.insert(c)) {
            return Err(GameError::Format(line.to_string()));
        }

        Ok(Self {
            state: GameState::new(players).with_turn(turn),
        })
    }

    /// Render as a save line, without the trailing newline.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(2 + DEFAULT_LENGTH * 3);
        line.push(self.state.turn.marker());
        for label in self.state.players.labels() {
            line.push(' ');
            line.push_str(&label);
        }
        line
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

/// Save `state` to a new file at `path`.
///
/// Fails with `UnsupportedConfiguration` off the default board and with
/// `Io` if the file already exists or can't be written.
pub fn save_game(state: &GameState, dim: Dimension, path: &Path) -> Result<()> {
    let record = SaveRecord::new(state, dim)?;

    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    writeln!(file, "{}", record.to_line())?;

    log::debug!("saved game to {}: {}", path.display(), record.to_line());
    Ok(())
}

/// Load a game from `path`.
///
/// Only the first line is read. Fails with `UnsupportedConfiguration` when
/// the active board isn't the default one, `Io` when the file can't be read
/// and `Format` when the line doesn't hold a valid save. Nothing is returned
/// on failure, so the caller's state stays as it was.
pub fn load_game(path: &Path, dim: Dimension) -> Result<GameState> {
    if !dim.is_default() {
        return Err(GameError::UnsupportedConfiguration(format!(
            "loading needs the default {} board, got {dim}",
            Dimension::DEFAULT
        )));
    }

    let contents = fs::read_to_string(path)?;
    let first_line = contents.lines().next().unwrap_or("");
    let record = SaveRecord::parse(first_line)?;

    log::debug!("loaded game from {}: {}", path.display(), record.to_line());
    Ok(record.into_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_placement;

    fn default_state() -> GameState {
        GameState::new(initial_placement(Dimension::DEFAULT))
    }

    #[test]
    fn test_to_line() {
        let record = SaveRecord::new(&default_state(), Dimension::DEFAULT).unwrap();
        assert_eq!(record.to_line(), "F B1 D1 F1 H1 E8");

        let record = SaveRecord::new(&default_state().with_turn(Figure::Hound), Dimension::DEFAULT).unwrap();
        assert_eq!(record.to_line(), "H B1 D1 F1 H1 E8");
    }

    #[test]
    fn test_new_rejects_other_dimensions() {
        let dim = Dimension::new(6).unwrap();
        let state = GameState::new(initial_placement(dim));
        assert!(matches!(
            SaveRecord::new(&state, dim),
            Err(GameError::UnsupportedConfiguration(_))
        ));

        // Nine-by-nine boards also have five pieces, but aren't the default.
        let dim = Dimension::new(9).unwrap();
        let state = GameState::new(initial_placement(dim));
        assert!(matches!(
            SaveRecord::new(&state, dim),
            Err(GameError::UnsupportedConfiguration(_))
        ));
    }

    #[test]
    fn test_parse() {
        let record = SaveRecord::parse("H B1 D1 F1 H1 E8\n").unwrap();
        assert_eq!(record.state().turn, Figure::Hound);
        assert_eq!(record.state().players, initial_placement(Dimension::DEFAULT));
    }

    #[test]
    fn test_parse_accepts_trailing_space() {
        assert!(SaveRecord::parse("F B1 D1 F1 H1 E8 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_mismatches() {
        for line in [
            "",
            "X B1 D1 F1 H1 E8",
            "F B1 D1 F1 H1",
            "F B1 D1 F1 H1 E8 A2",
            "F B1 D1 F1 H1 I8",
            "F B1 D1 F1 H1 E9",
            "F b1 D1 F1 H1 E8",
            "FB1 D1 F1 H1 E8",
            "F B1 D1 F1 H1 E10",
        ] {
            assert!(matches!(SaveRecord::parse(line), Err(GameError::Format(_))), "{line:?}");
        }
    }

    #[test]
    fn test_parse_rejects_shared_cells() {
        assert!(matches!(
            SaveRecord::parse("F B1 B1 F1 H1 E8"),
            Err(GameError::Format(_))
        ));
    }
}

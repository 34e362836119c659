//! Rules engine trait.
//!
//! Implementations define:
//! - Where the pieces start
//! - Which moves are legal for the side to move
//! - When the game is over
//!
//! The controller calls into `RulesEngine` and never interprets the board
//! geometry itself.

use crate::core::{Coord, Dimension, Figure, GameState, Move, PlayerSet};
use crate::error::MoveError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// The fox reached row 1.
    FoxWins,
    /// The fox has no diagonal cell left to move to.
    HoundsWin,
}

impl GameResult {
    /// Side that won.
    #[must_use]
    pub const fn winner(self) -> Figure {
        match self {
            GameResult::FoxWins => Figure::Fox,
            GameResult::HoundsWin => Figure::Hound,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, figure: Figure) -> bool {
        self.winner() == figure
    }

    /// Line shown to the players when the game ends.
    #[must_use]
    pub const fn announcement(self) -> &'static str {
        match self {
            GameResult::FoxWins => "The Fox wins!",
            GameResult::HoundsWin => "The Hounds win!",
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.announcement())
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate_move`: must not mutate anything; the controller re-prompts on `Err`
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// Board size the rules are bound to.
    fn dimension(&self) -> Dimension;

    /// Starting positions.
    fn initial_players(&self) -> PlayerSet;

    /// Check a proposed move for the side `turn`.
    fn validate_move(&self, players: &PlayerSet, turn: Figure, mv: Move) -> Result<(), MoveError>;

    /// Check whether the game has ended.
    fn is_terminal(&self, players: &PlayerSet) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Boolean form of `validate_move`.
    fn is_valid_move(&self, players: &PlayerSet, turn: Figure, mv: Move) -> bool {
        self.validate_move(players, turn, mv).is_ok()
    }

    /// Fresh game state, fox to move.
    fn initial_state(&self) -> GameState {
        GameState::new(self.initial_players())
    }

    /// Enumerate every legal move for `turn`.
    ///
    /// Every piece moves one diagonal step, so only diagonal neighbours
    /// of the side's pieces are candidates.
    fn legal_moves(&self, players: &PlayerSet, turn: Figure) -> Vec<Move> {
        let dim = self.dimension();
        let origins: Vec<Coord> = match turn {
            Figure::Fox => vec![players.fox()],
            Figure::Hound => players.hounds().to_vec(),
        };

        let mut moves = Vec::new();
        for origin in origins {
            for destination in origin.diagonal_neighbours(dim) {
                let mv = Move::new(origin, destination);
                if self.is_valid_move(players, turn, mv) && !moves.contains(&mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Validate and apply a move for the side to move.
    ///
    /// On success the moved piece is relocated, and the turn passes to the
    /// other side unless the move ended the game. On `Err` the state is
    /// untouched.
    fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<Option<GameResult>, MoveError> {
        self.validate_move(&state.players, state.turn, mv)?;
        let moved = state.players.relocate(state.turn, mv);
        debug_assert!(moved, "validated move {mv} found no piece to relocate");

        let result = self.is_terminal(&state.players);
        if result.is_none() {
            state.advance_turn();
        }
        Ok(result)
    }
}

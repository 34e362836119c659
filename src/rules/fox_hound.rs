//! Fox and Hound rules.
//!
//! - Hounds start on row 1 at columns B, D, F, ...; the fox starts on row `dim`
//! - Every move is a single diagonal step onto an empty cell
//! - The fox steps in any diagonal direction, hounds only towards higher rows
//! - The fox wins on reaching row 1; the hounds win when the fox is boxed in

use crate::core::{Coord, Dimension, Figure, Move, Occupancy, PlayerSet};
use crate::error::{MoveError, Result};

use super::engine::{GameResult, RulesEngine};

/// Rules for one board size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoxHoundRules {
    dim: Dimension,
}

impl FoxHoundRules {
    /// Rules for a raw board size. Fails with `InvalidDimension` outside 4..=26.
    pub fn new(dim: usize) -> Result<Self> {
        Ok(Self::with_dimension(Dimension::new(dim)?))
    }

    #[must_use]
    pub const fn with_dimension(dim: Dimension) -> Self {
        Self { dim }
    }

    /// Check whether the hounds have trapped the fox on this board.
    #[must_use]
    pub fn is_hound_win(&self, players: &PlayerSet) -> bool {
        is_hound_win(players, self.dim)
    }
}

/// Starting positions for a raw board size.
///
/// ```
/// let players = fox_hound::rules::initialise(8).unwrap();
/// assert_eq!(players.labels(), vec!["B1", "D1", "F1", "H1", "E8"]);
/// ```
pub fn initialise(dim: usize) -> Result<PlayerSet> {
    Ok(initial_placement(Dimension::new(dim)?))
}

/// Starting positions: hounds on row 1 at every second column from B,
/// the fox on row `dim` near the centre.
#[must_use]
pub fn initial_placement(dim: Dimension) -> PlayerSet {
    let hounds = (0..dim.hound_count()).map(|i| Coord::new(column(2 * i + 1), 1));
    PlayerSet::new(hounds, Coord::new(column(fox_start_column(dim)), row(dim.get())))
}

/// 0-based column of the fox's starting cell.
///
/// The fox goes on whichever centre cell shares a colour with the hounds'
/// squares, so the two sides can meet.
#[must_use]
pub fn fox_start_column(dim: Dimension) -> usize {
    let n = dim.get();
    if n % 2 == 0 {
        let half = n / 2;
        if half % 2 == 0 {
            half
        } else {
            half - 1
        }
    } else {
        let centre = n.div_ceil(2);
        if centre % 2 == 0 {
            centre - 1
        } else {
            centre
        }
    }
}

/// The fox wins by reaching row 1.
#[must_use]
pub fn is_fox_win(fox: Coord) -> bool {
    fox.row == 1
}

/// The hounds win when every diagonal neighbour of the fox is off the board
/// or holds a hound.
#[must_use]
pub fn is_hound_win(players: &PlayerSet, dim: Dimension) -> bool {
    players
        .fox()
        .diagonal_neighbours(dim)
        .all(|cell| !players.is_vacant(Occupancy::HoundsOnly, cell))
}

// Board indices never exceed MAX_DIM (26), so they always fit a u8.
fn column(index: usize) -> u8 {
    index as u8
}

fn row(index: usize) -> u8 {
    index as u8
}

impl RulesEngine for FoxHoundRules {
    fn dimension(&self) -> Dimension {
        self.dim
    }

    fn initial_players(&self) -> PlayerSet {
        initial_placement(self.dim)
    }

    fn validate_move(&self, players: &PlayerSet, turn: Figure, mv: Move) -> std::result::Result<(), MoveError> {
        let Move {
            origin,
            destination,
        } = mv;

        if !players.is_vacant(Occupancy::All, destination) {
            return Err(MoveError::DestinationOccupied(destination));
        }
        if !destination.is_on_board(self.dim) {
            return Err(MoveError::DestinationOffBoard(destination));
        }

        let owns_origin = match turn {
            Figure::Fox => players.fox() == origin,
            Figure::Hound => players.is_hound(origin),
        };
        if !owns_origin {
            return Err(MoveError::NotYourPiece {
                figure: turn,
                origin,
            });
        }

        let (d_col, d_row) = origin.delta_to(destination);
        let step_ok = match turn {
            Figure::Fox => d_col.abs() == 1 && d_row.abs() == 1,
            Figure::Hound => d_col.abs() == 1 && d_row == 1,
        };
        if !step_ok {
            return Err(MoveError::IllegalStep {
                figure: turn,
                origin,
                destination,
            });
        }

        Ok(())
    }

    fn is_terminal(&self, players: &PlayerSet) -> Option<GameResult> {
        if is_fox_win(players.fox()) {
            Some(GameResult::FoxWins)
        } else if is_hound_win(players, self.dim) {
            Some(GameResult::HoundsWin)
        } else {
            None
        }
    }
}

//! Board state: piece positions and whose turn it is.
//!
//! ## PlayerSet
//!
//! The hounds, in their fixed order, plus the single fox. Hound order matters:
//! when a hound moves, the first hound standing on the origin cell is the one
//! that moves, and saved games list hounds in this order.
//!
//! No two pieces share a cell after a legal move. That invariant is kept by the
//! rules engine's destination check, not by this structure.
//!
//! ## GameState
//!
//! A `PlayerSet` plus the side to move next. This is exactly what a save file
//! records.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{Dimension, MAX_DIM};
use super::coord::Coord;
use super::figure::Figure;
use crate::error::{GameError, Result};

/// Most hounds any legal board can hold (26 / 2).
pub const MAX_HOUNDS: usize = MAX_DIM / 2;

/// Which pieces count as obstacles in an occupancy query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    /// Hounds and fox.
    All,
    /// Hounds only; the fox's cell counts as empty.
    HoundsOnly,
}

/// Positions of every piece on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSet {
    hounds: SmallVec<[Coord; MAX_HOUNDS]>,
    fox: Coord,
}

impl PlayerSet {
    /// Create a player set from hound positions (in order) and the fox.
    pub fn new(hounds: impl IntoIterator<Item = Coord>, fox: Coord) -> Self {
        Self {
            hounds: hounds.into_iter().collect(),
            fox,
        }
    }

    /// Build from position labels in save order: hounds first, fox last.
    ///
    /// ```
    /// use fox_hound::core::{Dimension, PlayerSet};
    ///
    /// let players = PlayerSet::from_labels(Dimension::DEFAULT, &["B1", "D1", "F1", "H1", "E8"]).unwrap();
    /// assert_eq!(players.fox().encode(), "E8");
    /// assert_eq!(players.hounds().len(), 4);
    /// ```
    pub fn from_labels<S: AsRef<str>>(dim: Dimension, labels: &[S]) -> Result<Self> {
        if labels.len() != dim.piece_count() {
            return Err(GameError::InvalidArgument(format!(
                "expected {} positions for a {} board, got {}",
                dim.piece_count(),
                dim,
                labels.len()
            )));
        }

        let mut coords = SmallVec::<[Coord; MAX_HOUNDS + 1]>::new();
        for label in labels {
            let coord = Coord::decode(label.as_ref())?;
            if !coord.is_on_board(dim) {
                return Err(GameError::InvalidArgument(format!(
                    "position {coord} is off the {dim} board"
                )));
            }
            coords.push(coord);
        }

        // Length checked above, so there is always a last entry.
        let fox = coords[coords.len() - 1];
        coords.truncate(coords.len() - 1);
        Ok(Self::new(coords, fox))
    }

    /// Hound positions in their fixed order.
    #[must_use]
    pub fn hounds(&self) -> &[Coord] {
        &self.hounds
    }

    /// Fox position.
    #[must_use]
    pub fn fox(&self) -> Coord {
        self.fox
    }

    /// Total number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hounds.len() + 1
    }

    /// A player set always holds the fox.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over every position in save order: hounds, then the fox.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.hounds.iter().copied().chain(std::iter::once(self.fox))
    }

    /// Position labels in save order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.iter().map(Coord::encode).collect()
    }

    /// Check whether any piece stands on `coord`.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.fox == coord || self.is_hound(coord)
    }

    /// Check whether a hound stands on `coord`.
    #[must_use]
    pub fn is_hound(&self, coord: Coord) -> bool {
        self.hounds.contains(&coord)
    }

    /// Index of the first hound on `coord`.
    #[must_use]
    pub fn hound_index(&self, coord: Coord) -> Option<usize> {
        self.hounds.iter().position(|&h| h == coord)
    }

    /// Check that `coord` is free of the pieces selected by `scope`.
    #[must_use]
    pub fn is_vacant(&self, scope: Occupancy, coord: Coord) -> bool {
        match scope {
            Occupancy::All => !self.contains(coord),
            Occupancy::HoundsOnly => !self.is_hound(coord),
        }
    }

    /// Cell-to-figure lookup table, for callers scanning the whole board.
    #[must_use]
    pub fn occupancy(&self) -> FxHashMap<Coord, Figure> {
        let mut map = FxHashMap::default();
        for &hound in &self.hounds {
            map.insert(hound, Figure::Hound);
        }
        map.insert(self.fox, Figure::Fox);
        map
    }

    /// Move one piece without any rule checks.
    ///
    /// For the fox, the fox entry is replaced. For hounds, the first hound
    /// on `mv.origin` moves. Returns `false` if no hound stood there.
    pub fn relocate(&mut self, figure: Figure, mv: Move) -> bool {
        match figure {
            Figure::Fox => {
                self.fox = mv.destination;
                true
            }
            Figure::Hound => match self.hound_index(mv.origin) {
                Some(i) => {
                    self.hounds[i] = mv.destination;
                    true
                }
                None => false,
            },
        }
    }
}

/// A proposed move: origin cell to destination cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub origin: Coord,
    pub destination: Coord,
}

impl Move {
    #[must_use]
    pub const fn new(origin: Coord, destination: Coord) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Parse two whitespace-separated position labels, e.g. `"B1 C2"`.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(to), None) => Ok(Self::new(Coord::decode(from)?, Coord::decode(to)?)),
            _ => Err(GameError::InvalidArgument(format!(
                "expected two positions, got {input:?}"
            ))),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.origin, self.destination)
    }
}

/// Everything needed to resume a game: positions plus the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Side that moves next.
    pub turn: Figure,
    /// Piece positions.
    pub players: PlayerSet,
}

impl GameState {
    /// New state with the fox to move.
    #[must_use]
    pub fn new(players: PlayerSet) -> Self {
        Self {
            turn: Figure::Fox,
            players,
        }
    }

    /// Set the side to move.
    #[must_use]
    pub fn with_turn(mut self, turn: Figure) -> Self {
        self.turn = turn;
        self
    }

    /// Hand the move to the other side.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.other();
    }
}

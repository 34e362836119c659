//! Error types shared by the rules engine, persistence and console layers.

use crate::core::config::{MAX_DIM, MIN_DIM};
use crate::core::{Coord, Figure};

/// Errors raised by the Fox and Hound engine.
///
/// Rules Engine entry points fail fast with one of these before touching any
/// state, so a caller never observes a half-applied move.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimension {0} (expected {min}..={max})", min = MIN_DIM, max = MAX_DIM)]
    InvalidDimension(usize),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed position label {0:?}")]
    Format(String),

    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

/// Why a proposed move was refused.
///
/// Produced by move validation and consumed by the controller's retry loop;
/// never a failure of the engine itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("destination {0} is occupied")]
    DestinationOccupied(Coord),

    #[error("destination {0} is off the board")]
    DestinationOffBoard(Coord),

    #[error("no piece of the {figure} on {origin}")]
    NotYourPiece { figure: Figure, origin: Coord },

    #[error("{figure} cannot step from {origin} to {destination}")]
    IllegalStep {
        figure: Figure,
        origin: Coord,
        destination: Coord,
    },
}

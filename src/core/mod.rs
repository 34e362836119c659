//! Core board types: coordinates, dimensions, figures and piece positions.
//!
//! These carry no game rules; `rules` decides what may happen to them.

pub mod config;
pub mod coord;
pub mod figure;
pub mod state;

pub use config::{Dimension, GameConfig, DEFAULT_DIM, DEFAULT_LENGTH, MAX_DIM, MIN_DIM};
pub use coord::Coord;
pub use figure::Figure;
pub use state::{GameState, Move, Occupancy, PlayerSet};

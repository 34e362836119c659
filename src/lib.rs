//! # fox-hound
//!
//! The Fox and Hound board game: one fox tries to reach row 1, the hounds try
//! to box it in.
//!
//! ## Design Principles
//!
//! 1. **Rules Separate From I/O**: `rules` knows nothing about the terminal;
//!    `ui` knows nothing about legality. `game` connects them.
//!
//! 2. **Validated Inputs**: board sizes are checked once, when a `Dimension`
//!    is built, and labels once, when a `Coord` is decoded.
//!
//! 3. **Explicit State**: the hounds and the fox are separate fields of a
//!    `PlayerSet`, not positions in a flat array.
//!
//! ## Modules
//!
//! - `core`: coordinates, dimensions, figures, piece positions
//! - `rules`: `RulesEngine` trait and the Fox and Hound rules
//! - `persist`: one-line save files for the default board
//! - `ui`: board rendering and console prompts
//! - `game`: the controller state machine

pub mod core;
pub mod error;
pub mod game;
pub mod persist;
pub mod rules;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{Coord, Dimension, Figure, GameConfig, GameState, Move, Occupancy, PlayerSet};

pub use crate::error::{GameError, MoveError, Result};

pub use crate::rules::{FoxHoundRules, GameResult, RulesEngine};

pub use crate::persist::{load_game, save_game, SaveRecord};

pub use crate::ui::{render_board, Console, MenuChoice, TextConsole};

pub use crate::game::{ControllerState, GameController};

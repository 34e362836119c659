//! Game session: the controller state machine tying rules, console and
//! persistence together.

pub mod controller;

pub use controller::{ControllerState, GameController, SEPARATOR};

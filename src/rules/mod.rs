//! Rules engine: placement, move legality and win detection.
//!
//! `RulesEngine` is the seam the controller talks to; `FoxHoundRules` is the
//! Fox and Hound implementation, with its building blocks exposed as free
//! functions for callers that only need one check.

pub mod engine;
pub mod fox_hound;

pub use engine::{GameResult, RulesEngine};
pub use fox_hound::{
    fox_start_column, initial_placement, initialise, is_fox_win, is_hound_win, FoxHoundRules,
};

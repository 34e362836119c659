//! Game controller: the menu loop that runs one game from start to finish.
//!
//! ## States
//!
//! - `AwaitingMenuChoice`: board shown, waiting for Move/Save/Load/Exit
//! - `AwaitingMoveInput`: re-prompting until a legal move is entered
//! - `GameOver`: a side won, or the players chose Exit
//!
//! The controller owns the game state exclusively. Save and load failures are
//! reported to the players and leave the state unchanged.

use std::io;

use crate::core::{Figure, GameConfig, GameState};
use crate::error::{GameError, Result};
use crate::persist::{load_game, save_game};
use crate::rules::{GameResult, RulesEngine};
use crate::ui::{Console, MenuChoice};

/// Printed before every board display.
pub const SEPARATOR: &str = "\n#################################";

/// Where the controller is in the menu loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    AwaitingMenuChoice,
    AwaitingMoveInput,
    /// `None` when the game ended without a winner (Exit, or input closed).
    GameOver(Option<GameResult>),
}

impl ControllerState {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, ControllerState::GameOver(_))
    }
}

/// Runs a game over a rules engine and a console.
pub struct GameController<E, C> {
    rules: E,
    console: C,
    config: GameConfig,
    state: GameState,
    phase: ControllerState,
}

impl<E: RulesEngine, C: Console> GameController<E, C> {
    /// New controller at the starting position, fox to move.
    pub fn new(rules: E, console: C, config: GameConfig) -> Self {
        let state = rules.initial_state();
        Self {
            rules,
            console,
            config,
            state,
            phase: ControllerState::AwaitingMenuChoice,
        }
    }

    /// Replace the starting position, e.g. to resume from a known state.
    #[must_use]
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> ControllerState {
        self.phase
    }

    /// Give back the console, e.g. to inspect its output in tests.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run menu iterations until the game is over.
    ///
    /// Closed console input ends the game without a winner. Only failures to
    /// write to the console are returned as errors.
    pub fn run(&mut self) -> Result<Option<GameResult>> {
        log::info!("starting {} game", self.rules.dimension());

        while !self.phase.is_over() {
            match self.step() {
                Ok(_) => {}
                Err(GameError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    log::warn!("console input closed, ending game");
                    self.phase = ControllerState::GameOver(None);
                }
                Err(e) => return Err(e),
            }
        }

        let result = match self.phase {
            ControllerState::GameOver(result) => result,
            _ => None,
        };
        log::info!("game over: {}", result.map_or("no winner", GameResult::announcement));
        Ok(result)
    }

    /// One menu iteration: show the board, read a choice, act on it.
    pub fn step(&mut self) -> Result<ControllerState> {
        let dim = self.rules.dimension();
        self.console.message(SEPARATOR)?;
        self.console.display_board(&self.state.players, dim)?;

        let choice = self.console.menu_query(self.state.turn)?;
        match MenuChoice::from_number(choice) {
            Some(MenuChoice::Move) => self.handle_move()?,
            Some(MenuChoice::Save) => self.handle_save()?,
            Some(MenuChoice::Load) => self.handle_load()?,
            Some(MenuChoice::Exit) => self.phase = ControllerState::GameOver(None),
            None => self
                .console
                .error(&format!("ERROR: invalid menu choice: {choice}"))?,
        }
        Ok(self.phase)
    }

    fn handle_move(&mut self) -> Result<()> {
        let dim = self.rules.dimension();
        let mover = self.state.turn;

        if self.rules.legal_moves(&self.state.players, mover).is_empty() {
            log::warn!("{mover} has no legal move");
            let text = match mover {
                Figure::Fox => "ERROR: The Fox has no legal move.",
                Figure::Hound => "ERROR: The Hounds have no legal move.",
            };
            self.console.error(text)?;
            return Ok(());
        }
        self.phase = ControllerState::AwaitingMoveInput;

        let outcome = loop {
            let mv = self.console.position_query(dim)?;
            match self.rules.apply_move(&mut self.state, mv) {
                Ok(outcome) => {
                    log::debug!("{mover} moved {mv}");
                    break outcome;
                }
                Err(reason) => {
                    log::debug!("rejected move {mv}: {reason}");
                    self.console.error("ERROR: The move is invalid")?;
                }
            }
        };

        self.phase = match outcome {
            Some(result) => {
                self.console.message(result.announcement())?;
                ControllerState::GameOver(Some(result))
            }
            None => ControllerState::AwaitingMenuChoice,
        };
        Ok(())
    }

    fn handle_save(&mut self) -> Result<()> {
        let input = self.console.file_query()?;
        let path = self.config.resolve_path(&input);

        if let Err(e) = save_game(&self.state, self.rules.dimension(), &path) {
            log::warn!("saving to {} failed: {e}", path.display());
            self.console.error("ERROR: Saving file failed.")?;
        }
        Ok(())
    }

    fn handle_load(&mut self) -> Result<()> {
        let input = self.console.file_query()?;
        let path = self.config.resolve_path(&input);

        match load_game(&path, self.rules.dimension()) {
            Ok(state) => self.state = state,
            Err(e) => {
                log::warn!("loading from {} failed: {e}", path.display());
                self.console.error("ERROR: Loading from file failed.")?;
            }
        }
        Ok(())
    }
}

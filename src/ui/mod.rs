//! Text console: board rendering and the prompts players answer.

pub mod console;
pub mod render;

pub use console::{Console, MenuChoice, TextConsole, MAIN_MENU};
pub use render::render_board;

//! Console collaborator: menu, coordinate and file-path prompts.
//!
//! `Console` is the seam between the game controller and the terminal.
//! `TextConsole` implements it over any reader/writer pair, so the whole game
//! can be driven from an in-memory script in tests.
//!
//! Malformed input is re-prompted here and never reaches the controller,
//! with one exception: a number outside the menu range is passed through so
//! the controller can report it.

use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use crate::core::{Coord, Dimension, Figure, Move, PlayerSet};

use super::render::render_board;

/// Main menu display string.
pub const MAIN_MENU: &str = "\n1. Move\n2. Save\n3. Load\n4. Exit\n\nEnter 1 - 4:";

/// Main menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Move = 1,
    Save = 2,
    Load = 3,
    Exit = 4,
}

impl MenuChoice {
    /// Map a menu number to an entry.
    #[must_use]
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Move),
            2 => Some(MenuChoice::Save),
            3 => Some(MenuChoice::Load),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Terminal operations the controller needs.
///
/// Every query blocks until it has a well-formed answer. End of input is
/// reported as `io::ErrorKind::UnexpectedEof`.
pub trait Console {
    /// Print the board.
    fn display_board(&mut self, players: &PlayerSet, dim: Dimension) -> io::Result<()>;

    /// Show the menu for `turn` and read a menu number.
    fn menu_query(&mut self, turn: Figure) -> io::Result<i64>;

    /// Read an origin/destination pair, both on the board.
    fn position_query(&mut self, dim: Dimension) -> io::Result<Move>;

    /// Read a raw file path.
    fn file_query(&mut self) -> io::Result<String>;

    /// Print an informational line.
    fn message(&mut self, text: &str) -> io::Result<()>;

    /// Print an error line.
    fn error(&mut self, text: &str) -> io::Result<()>;
}

/// Line-oriented console over an injected input stream and two output streams.
pub struct TextConsole<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl TextConsole<StdinLock<'static>, Stdout, Stderr> {
    /// Console on the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> TextConsole<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Give back the output streams, e.g. to inspect them in tests.
    pub fn into_outputs(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Read one line. Bytes that aren't UTF-8 become U+FFFD, so the caller's
    /// parser rejects the line and re-prompts.
    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "console input closed"));
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn parse_pair(line: &str, dim: Dimension) -> Option<Move> {
        let mv = Move::parse(line).ok()?;
        (mv.origin.is_on_board(dim) && mv.destination.is_on_board(dim)).then_some(mv)
    }
}

impl<R: BufRead, W: Write, E: Write> Console for TextConsole<R, W, E> {
    fn display_board(&mut self, players: &PlayerSet, dim: Dimension) -> io::Result<()> {
        write!(self.out, "{}", render_board(players, dim))?;
        self.out.flush()
    }

    fn menu_query(&mut self, turn: Figure) -> io::Result<i64> {
        loop {
            writeln!(self.out, "{} to move", turn.side_name())?;
            writeln!(self.out, "{MAIN_MENU}")?;
            self.out.flush()?;

            let line = self.read_line()?;
            match line.split_whitespace().next().map(str::parse::<i64>) {
                Some(Ok(n)) => return Ok(n),
                _ => writeln!(self.out, "Please enter valid number.")?,
            }
        }
    }

    fn position_query(&mut self, dim: Dimension) -> io::Result<Move> {
        let last = Coord::new((dim.get() - 1) as u8, dim.get() as u8);
        loop {
            writeln!(self.out, "Provide origin and destination coordinates.")?;
            writeln!(self.out, "Enter two positions between A1-{last}:")?;
            self.out.flush()?;

            let line = self.read_line()?;
            if let Some(mv) = Self::parse_pair(&line, dim) {
                return Ok(mv);
            }
            writeln!(self.out)?;
            self.error("ERROR: Please enter valid coordinate pair separated by space.")?;
        }
    }

    fn file_query(&mut self) -> io::Result<String> {
        writeln!(self.out, "Enter file path:")?;
        self.out.flush()?;
        Ok(self.read_line()?.trim().to_string())
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.err, "{text}")?;
        self.err.flush()
    }
}

//! Board configuration.
//!
//! - `Dimension`: a validated board size (4..=26), fixed for a whole game
//! - `GameConfig`: dimension plus the directory bare save-file names resolve against
//!
//! Every rules entry point takes a `Dimension`, so an out-of-range board size
//! is rejected once, at construction, and can't reach the engine afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Default dimension of the game board when none is specified.
pub const DEFAULT_DIM: usize = 8;
/// Minimum board dimension.
pub const MIN_DIM: usize = 4;
/// Maximum board dimension (one column per letter A..Z).
pub const MAX_DIM: usize = 26;
/// Number of pieces on the default board (4 hounds + 1 fox).
pub const DEFAULT_LENGTH: usize = DEFAULT_DIM / 2 + 1;

/// Warning shown when a requested dimension falls outside `MIN_DIM..=MAX_DIM`.
pub const DIMENSION_FALLBACK_WARNING: &str =
    "Sorry, board dimensions should be from 4 to 26. Using default dimensions instead";

/// Side length of a square board, always within `MIN_DIM..=MAX_DIM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Dimension(usize);

impl Dimension {
    /// The 8×8 board, the only size that supports save and load.
    pub const DEFAULT: Dimension = Dimension(DEFAULT_DIM);

    /// Validate a raw board size.
    pub fn new(dim: usize) -> Result<Self> {
        if (MIN_DIM..=MAX_DIM).contains(&dim) {
            Ok(Self(dim))
        } else {
            Err(GameError::InvalidDimension(dim))
        }
    }

    /// Get the raw side length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of hounds placed on a board of this size.
    #[must_use]
    pub const fn hound_count(self) -> usize {
        self.0 / 2
    }

    /// Number of pieces (hounds plus the fox).
    #[must_use]
    pub const fn piece_count(self) -> usize {
        self.hound_count() + 1
    }

    #[must_use]
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Dimension {
    type Error = GameError;

    fn try_from(dim: usize) -> Result<Self> {
        Self::new(dim)
    }
}

impl From<Dimension> for usize {
    fn from(dim: Dimension) -> usize {
        dim.0
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Startup configuration for one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Board size for the whole game.
    pub dimension: Dimension,

    /// Directory that bare save-file names (no path separator) resolve against.
    pub save_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::DEFAULT,
            save_dir: PathBuf::from("."),
        }
    }
}

impl GameConfig {
    /// Create a configuration for the default board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from an optional requested dimension.
    ///
    /// Out-of-range requests fall back to the default board; the second
    /// element is `true` when that happened so the caller can warn the user.
    pub fn from_requested(requested: Option<i64>) -> (Self, bool) {
        let Some(raw) = requested else {
            return (Self::default(), false);
        };

        match usize::try_from(raw).ok().and_then(|d| Dimension::new(d).ok()) {
            Some(dimension) => (Self::default().with_dimension(dimension), false),
            None => {
                log::warn!("requested board dimension {raw} out of range, using {DEFAULT_DIM}");
                (Self::default(), true)
            }
        }
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the directory bare file names resolve against.
    #[must_use]
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Resolve a user-entered file name.
    ///
    /// Input containing `/` or `\` is taken verbatim, anything else is
    /// placed inside `save_dir`.
    #[must_use]
    pub fn resolve_path(&self, input: &str) -> PathBuf {
        if input.contains(|c| c == '/' || c == '\\') {
            PathBuf::from(input)
        } else {
            self.save_dir.join(input)
        }
    }

    #[must_use]
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }
}

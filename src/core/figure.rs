//! The two sides of the game.
//!
//! `Figure` doubles as the turn marker: the side whose figure moves next.
//! Saved games record it as a single character, `F` or `H`.

use serde::{Deserialize, Serialize};

/// Symbol for a hound figure.
pub const HOUND_FIELD: char = 'H';
/// Symbol for the fox figure.
pub const FOX_FIELD: char = 'F';

/// One side of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Figure {
    /// The single evading piece. Every game starts with the Fox to move.
    #[default]
    Fox,
    /// The pursuing pieces, moved one at a time.
    Hound,
}

impl Figure {
    /// The side that moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Figure::Fox => Figure::Hound,
            Figure::Hound => Figure::Fox,
        }
    }

    /// Board and save-file symbol.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Figure::Fox => FOX_FIELD,
            Figure::Hound => HOUND_FIELD,
        }
    }

    /// Parse a board or save-file symbol.
    #[must_use]
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            FOX_FIELD => Some(Figure::Fox),
            HOUND_FIELD => Some(Figure::Hound),
            _ => None,
        }
    }

    /// Name used in prompts ("Fox to move", "Hounds to move").
    #[must_use]
    pub const fn side_name(self) -> &'static str {
        match self {
            Figure::Fox => "Fox",
            Figure::Hound => "Hounds",
        }
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.side_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_alternates() {
        assert_eq!(Figure::Fox.other(), Figure::Hound);
        assert_eq!(Figure::Hound.other(), Figure::Fox);
        assert_eq!(Figure::Fox.other().other(), Figure::Fox);
    }

    #[test]
    fn test_markers() {
        assert_eq!(Figure::Fox.marker(), 'F');
        assert_eq!(Figure::Hound.marker(), 'H');
        assert_eq!(Figure::from_marker('F'), Some(Figure::Fox));
        assert_eq!(Figure::from_marker('H'), Some(Figure::Hound));
        assert_eq!(Figure::from_marker('#'), None);
        assert_eq!(Figure::from_marker('f'), None);
    }

    #[test]
    fn test_default_is_fox() {
        assert_eq!(Figure::default(), Figure::Fox);
        assert_eq!(format!("{}", Figure::Hound), "Hounds");
    }
}

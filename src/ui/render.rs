//! Text rendering of the board.
//!
//! ```text
//!   ABCDEFGH
//!
//! 1 .H.H.H.H 1
//! ...
//! 8 ....F... 8
//!
//!   ABCDEFGH
//! ```
//!
//! Boards of ten or more rows zero-pad the row numbers to two digits and
//! widen the letter margins to match.

use crate::core::{Coord, Dimension, PlayerSet};

const EMPTY_FIELD: char = '.';

/// Render the board with column letters above and below and row numbers on
/// both sides. Always ends in a newline.
#[must_use]
pub fn render_board(players: &PlayerSet, dim: Dimension) -> String {
    let n = dim.get();
    let wide = n >= 10;
    let occupancy = players.occupancy();
    let mut out = String::with_capacity((n + 8) * (n + 4));

    push_letters(&mut out, n, wide);
    out.push('\n');

    for row in 1..=n {
        let label = row_label(row, wide);
        out.push_str(&label);
        out.push(' ');
        for col in 0..n {
            let cell = Coord::new(col as u8, row as u8);
            out.push(match occupancy.get(&cell) {
                Some(figure) => figure.marker(),
                None => EMPTY_FIELD,
            });
        }
        out.push(' ');
        out.push_str(&label);
        out.push('\n');
    }

    out.push('\n');
    push_letters(&mut out, n, wide);
    out
}

fn row_label(row: usize, wide: bool) -> String {
    if wide {
        format!("{row:02}")
    } else {
        row.to_string()
    }
}

fn push_letters(out: &mut String, n: usize, wide: bool) {
    let margin = if wide { "   " } else { "  " };
    out.push_str(margin);
    for col in 0..n {
        out.push(Coord::new(col as u8, 1).letter());
    }
    out.push_str(margin);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_placement;

    #[test]
    fn test_render_default_board() {
        let rendered = render_board(&initial_placement(Dimension::DEFAULT), Dimension::DEFAULT);
        let expected = "  ABCDEFGH  \n\
                        \n\
                        1 .H.H.H.H 1\n\
                        2 ........ 2\n\
                        3 ........ 3\n\
                        4 ........ 4\n\
                        5 ........ 5\n\
                        6 ........ 6\n\
                        7 ........ 7\n\
                        8 ....F... 8\n\
                        \n  ABCDEFGH  \n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_wide_board() {
        let dim = Dimension::new(10).unwrap();
        let rendered = render_board(&initial_placement(dim), dim);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "   ABCDEFGHIJ   ");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "01 .H.H.H.H.H 01");
        assert_eq!(lines[11], "10 ....F..... 10");
        assert_eq!(lines[12], "");
        assert_eq!(lines[13], "   ABCDEFGHIJ   ");
        assert_eq!(lines.len(), 14);
    }
}

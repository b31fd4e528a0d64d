//! Win detection logic for Drop Token.

use crate::types::{Board, Cell, Symbol};
use tracing::instrument;

/// The ten winning lines, in evaluation order.
pub const LINES: [[usize; 4]; 10] = [
    // Rows
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    // Columns
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    // Diagonals
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` if every cell of some line holds that symbol.
/// Lines are checked rows first, then columns, then diagonals, and the
/// first complete line wins. A game stops at its first completed line, so
/// two different symbols never both hold one on a reachable board.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    let cells = board.cells();

    for [a, b, c, d] in LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] && cell == cells[d] {
            return cell.symbol();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_bottom_row() {
        let b = board("........XXX.OOOO");
        assert_eq!(check_winner(&b), Some(Symbol::O));
    }

    #[test]
    fn test_winner_column() {
        let b = board("X...XO..XO..XO..");
        assert_eq!(check_winner(&b), Some(Symbol::X));
    }

    #[test]
    fn test_winner_each_diagonal() {
        let falling = board("X...OX..OOX.OOOX");
        assert_eq!(check_winner(&falling), Some(Symbol::X));

        let rising = board("...O..OX.OXXOXXX");
        assert_eq!(check_winner(&rising), Some(Symbol::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let b = board("........XXX.OOO.");
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut b = Board::new();
            for index in line {
                b = b.with_cell(index, Cell::Occupied(Symbol::O));
            }
            assert_eq!(check_winner(&b), Some(Symbol::O), "line {:?}", line);
        }
    }
}

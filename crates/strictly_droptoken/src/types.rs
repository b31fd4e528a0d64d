//! Core domain types for Drop Token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows on the board.
pub const ROWS: usize = 4;

/// Number of columns on the board.
pub const COLUMNS: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = ROWS * COLUMNS;

/// Symbol a player drops.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Symbol X (moves first unless configured otherwise).
    X,
    /// Symbol O.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the Drop Token board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a token.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Symbol::X) => 'X',
            Cell::Occupied(Symbol::O) => 'O',
        }
    }
}

/// 4x4 Drop Token board.
///
/// Cells are stored row-major: index 0 is the top-left cell, index 15 the
/// bottom-right one, and the column of a cell is `index % COLUMNS`.
///
/// Boards are values. Every move produces a new board, which is what lets
/// the session keep a history of snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-15).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Gets the cell at the given index (0-15).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns a copy of this board with one cell replaced.
    pub(crate) fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(COLUMNS) {
            let glyphs: Vec<String> = row.iter().map(|c| c.glyph().to_string()).collect();
            writeln!(f, "{}", glyphs.join("|"))?;
        }
        write!(f, "0 1 2 3")
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character other than `.`, `X` or `O`.
    #[display("Unexpected board character {:?}", _0)]
    UnexpectedChar(char),

    /// Wrong number of cells.
    #[display("Expected 16 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses 16 cells (`.`, `X`, `O`) in row-major order.
    ///
    /// Whitespace and `|` separators are ignored, so the output of
    /// `Display` minus its column ruler parses back. Gravity is not
    /// enforced here; see [`crate::rules::is_settled`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch {
                '.' => Cell::Empty,
                'x' | 'X' => Cell::Occupied(Symbol::X),
                'o' | 'O' => Cell::Occupied(Symbol::O),
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }

        let cells: [Cell; CELLS] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { cells })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Symbol),
    /// Board filled with no winner.
    Drawn,
}

impl GameStatus {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }

    #[test]
    fn test_symbol_parses_case_insensitively() {
        assert_eq!("x".parse::<Symbol>().unwrap(), Symbol::X);
        assert_eq!("O".parse::<Symbol>().unwrap(), Symbol::O);
        assert!("z".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!((0..CELLS).all(|i| board.is_empty(i)));
        assert_eq!(board.get(CELLS), None);
        assert!(!board.is_empty(CELLS));
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "....
                            ....
                            X...
                            XO.."
            .parse()
            .unwrap();
        let text = board.to_string();
        assert!(text.starts_with(".|.|.|.\n"));
        assert!(text.ends_with("0 1 2 3"));

        let without_ruler = text.trim_end_matches("0 1 2 3");
        assert_eq!(without_ruler.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "...".parse::<Board>(),
            Err(BoardParseError::WrongLength(3))
        );
        assert_eq!(
            "...............Z".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('Z'))
        );
    }

    #[test]
    fn test_status_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won(Symbol::O).is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert_eq!(GameStatus::Won(Symbol::O).winner(), Some(Symbol::O));
        assert_eq!(GameStatus::Drawn.winner(), None);
    }
}

//! First-class action types for Drop Token.
//!
//! Moves are domain events, not side effects. They carry the symbol's
//! intent and can be validated independently of execution.

use crate::types::{Board, COLUMNS, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where a move is aimed.
///
/// Presentation layers address either a column directly or the cell
/// that was clicked. Cell targets still obey gravity: only the cell a
/// token would actually land on is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTarget {
    /// A column, 0-3.
    Column(usize),
    /// A cell index, 0-15.
    Cell(usize),
}

impl MoveTarget {
    /// The column this target drops into.
    pub fn column(self) -> usize {
        match self {
            MoveTarget::Column(column) => column,
            MoveTarget::Cell(index) => index % COLUMNS,
        }
    }
}

impl std::fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveTarget::Column(column) => write!(f, "column {}", column),
            MoveTarget::Cell(index) => write!(f, "cell {}", index),
        }
    }
}

/// A move in Drop Token: a symbol dropped at a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol being dropped.
    pub symbol: Symbol,
    /// Where it is aimed.
    pub target: MoveTarget,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(symbol: Symbol, target: MoveTarget) -> Self {
        Self { symbol, target }
    }

    /// Shorthand for a column move.
    pub fn column(symbol: Symbol, column: usize) -> Self {
        Self::new(symbol, MoveTarget::Column(column))
    }

    /// Shorthand for a cell move.
    pub fn cell(symbol: Symbol, index: usize) -> Self {
        Self::new(symbol, MoveTarget::Cell(index))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.target)
    }
}

/// An accepted move together with the board it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    column: usize,
    symbol: Symbol,
}

impl MoveRecord {
    pub(crate) fn new(board: Board, column: usize, symbol: Symbol) -> Self {
        Self {
            board,
            column,
            symbol,
        }
    }

    /// Board after the move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Column the token was dropped into.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Symbol that was placed.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

/// Error that can occur when validating or applying an operation.
///
/// Every error leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Column outside 0-3.
    #[display("Column {} is out of range (must be 0-3)", _0)]
    InvalidColumn(usize),

    /// Cell index outside 0-15.
    #[display("Cell {} is out of range (must be 0-15)", _0)]
    InvalidCell(usize),

    /// The column has no empty cell.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// The targeted cell already holds a token.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The targeted cell would float above an empty cell.
    #[display("Cell {} is not playable yet", _0)]
    CellNotPlayable(usize),

    /// It's not this symbol's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Symbol),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameAlreadyTerminal,

    /// Jump target outside the history.
    #[display("Step {} is not in the move history", _0)]
    InvalidStepIndex(usize),

    /// First mover assigned after the game started.
    #[display("The first mover can only be chosen before any move")]
    InvalidPhase,

    /// No column can take a token.
    #[display("Board is full")]
    BoardFull,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

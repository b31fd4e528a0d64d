//! Draw detection logic for Drop Token.

use super::gravity::is_column_full;
use super::win::check_winner;
use crate::types::{Board, COLUMNS, GameStatus};
use tracing::instrument;

/// Checks if the board is full.
///
/// Only the top row is inspected: under gravity a full top row means
/// every column, and so every cell, is occupied.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    (0..COLUMNS).all(|column| is_column_full(board, column))
}

/// A full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

/// Derives the game status from a board alone.
#[instrument]
pub fn status_of(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

//! Gravity rules: where a token lands and which cells can take one.

use crate::action::MoveError;
use crate::types::{Board, CELLS, COLUMNS, Cell, ROWS, Symbol};
use tracing::{debug, instrument};

/// Checks if a column's top cell is occupied.
///
/// Columns outside `0..COLUMNS` are a caller error. They report `true`
/// since nothing can ever be dropped there.
#[instrument]
pub fn is_column_full(board: &Board, column: usize) -> bool {
    if column >= COLUMNS {
        return true;
    }
    !board.is_empty(column)
}

/// Index of the cell a token dropped into `column` would fill.
///
/// Scans from the bottom row upward and returns `None` for a full or
/// out-of-range column.
#[instrument]
pub fn landing_index(board: &Board, column: usize) -> Option<usize> {
    if column >= COLUMNS {
        return None;
    }
    (0..ROWS)
        .rev()
        .map(|row| row * COLUMNS + column)
        .find(|&index| board.is_empty(index))
}

/// Drops `symbol` into `column`, returning the resulting board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`MoveError::InvalidColumn`] if `column` is outside `0..4`
/// - [`MoveError::ColumnFull`] if the column has no empty cell
#[instrument]
pub fn drop_token(board: &Board, column: usize, symbol: Symbol) -> Result<Board, MoveError> {
    if column >= COLUMNS {
        return Err(MoveError::InvalidColumn(column));
    }
    if is_column_full(board, column) {
        return Err(MoveError::ColumnFull(column));
    }

    let index = landing_index(board, column).ok_or(MoveError::ColumnFull(column))?;
    debug!(index, "Token settles");
    Ok(board.with_cell(index, Cell::Occupied(symbol)))
}

/// Checks whether a cell could receive a token under gravity.
///
/// True for the bottom row and for cells sitting directly on top of an
/// occupied cell. Occupancy of the cell itself is not considered.
#[instrument]
pub fn is_cell_playable(board: &Board, index: usize) -> bool {
    if index >= CELLS {
        return false;
    }
    if index >= CELLS - COLUMNS {
        return true;
    }
    !board.is_empty(index + COLUMNS)
}

/// Checks that no token floats above an empty cell.
#[instrument]
pub fn is_settled(board: &Board) -> bool {
    (0..CELLS - COLUMNS).all(|index| board.is_empty(index) || !board.is_empty(index + COLUMNS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_drop_into_empty_column_lands_bottom() {
        let after = drop_token(&Board::new(), 2, Symbol::X).unwrap();
        assert_eq!(after.get(14), Some(Cell::Occupied(Symbol::X)));
        assert_eq!(after.occupied_count(), 1);
    }

    #[test]
    fn test_drop_stacks_on_existing_tokens() {
        let before = board("........X...O...");
        let after = drop_token(&before, 0, Symbol::O).unwrap();
        assert_eq!(after.get(4), Some(Cell::Occupied(Symbol::O)));
        assert_eq!(before.occupied_count(), 2);
        assert_eq!(after.occupied_count(), 3);
    }

    #[test]
    fn test_drop_into_full_column_fails() {
        let before = board("O...X...O...X...");
        assert!(is_column_full(&before, 0));
        assert_eq!(
            drop_token(&before, 0, Symbol::X),
            Err(MoveError::ColumnFull(0))
        );
    }

    #[test]
    fn test_drop_into_invalid_column_fails() {
        assert_eq!(
            drop_token(&Board::new(), 4, Symbol::X),
            Err(MoveError::InvalidColumn(4))
        );
        assert!(is_column_full(&Board::new(), 7));
        assert_eq!(landing_index(&Board::new(), 7), None);
    }

    #[test]
    fn test_every_drop_keeps_board_settled() {
        // Play every column repeatedly and check the landing cell each time.
        let mut b = Board::new();
        let mut symbol = Symbol::X;
        for column in [0, 1, 1, 3, 2, 2, 2, 0, 3, 3, 1, 0, 0, 1, 2, 3] {
            let expected = landing_index(&b, column).unwrap();
            let after = drop_token(&b, column, symbol).unwrap();

            assert_eq!(after.occupied_count(), b.occupied_count() + 1);
            assert_eq!(expected % COLUMNS, column);
            assert_eq!(after.get(expected), Some(Cell::Occupied(symbol)));
            for index in (expected + COLUMNS..CELLS).step_by(COLUMNS) {
                assert!(!after.is_empty(index), "cell {} below must be occupied", index);
            }
            assert!(is_settled(&after));

            b = after;
            symbol = symbol.opponent();
        }
        assert!((0..COLUMNS).all(|c| is_column_full(&b, c)));
    }

    #[test]
    fn test_cell_playable() {
        let b = board("........X.......");
        assert!(is_cell_playable(&b, 12));
        assert!(is_cell_playable(&b, 15));
        assert!(is_cell_playable(&b, 4));
        assert!(!is_cell_playable(&b, 5));
        assert!(!is_cell_playable(&b, 0));
        assert!(!is_cell_playable(&b, 16));
    }

    #[test]
    fn test_floating_token_is_not_settled() {
        assert!(is_settled(&board("........X...O...")));
        assert!(!is_settled(&board("X...............")));
    }
}

//! Autonomous move policy: random start column, linear probe.

use crate::action::MoveError;
use crate::rules::is_column_full;
use crate::types::{Board, COLUMNS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// First open column probing from `start`, wrapping around.
///
/// At most one probe per column is made, so a full board yields `None`
/// after four probes.
#[instrument]
pub fn probe_from(board: &Board, start: usize) -> Option<usize> {
    (0..COLUMNS)
        .map(|offset| (start + offset) % COLUMNS)
        .find(|&column| !is_column_full(board, column))
}

/// A single-ply player that picks a uniformly random column and walks
/// right until it finds one with room.
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: StdRng,
}

impl AutoPlayer {
    /// Creates a player seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic player.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses a column for the next token.
    ///
    /// # Errors
    ///
    /// [`MoveError::BoardFull`] when every column is full.
    #[instrument(skip(self))]
    pub fn choose_column(&mut self, board: &Board) -> Result<usize, MoveError> {
        let start = self.rng.random_range(0..COLUMNS);
        let column = probe_from(board, start).ok_or(MoveError::BoardFull)?;
        debug!(start, column, "Autonomous column chosen");
        Ok(column)
    }
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::drop_token;
    use crate::types::Symbol;

    // Columns 0, 2 and 3 full, column 1 empty.
    const ONE_OPEN: &str = "X.XO
                            O.OX
                            X.XO
                            O.OX";

    #[test]
    fn test_probe_wraps_to_only_open_column() {
        let board: Board = ONE_OPEN.parse().unwrap();
        for start in 0..COLUMNS {
            assert_eq!(probe_from(&board, start), Some(1), "start {}", start);
        }
    }

    #[test]
    fn test_probe_takes_start_when_open() {
        let board = Board::new();
        for start in 0..COLUMNS {
            assert_eq!(probe_from(&board, start), Some(start));
        }
    }

    #[test]
    fn test_full_board_has_no_column() {
        let board: Board = "XXOOOOXXXXOOOOXX".parse().unwrap();
        assert_eq!(probe_from(&board, 2), None);
        assert_eq!(
            AutoPlayer::seeded(3).choose_column(&board),
            Err(MoveError::BoardFull)
        );
    }

    #[test]
    fn test_choice_is_always_open() {
        let mut player = AutoPlayer::seeded(42);
        let mut board = Board::new();
        let mut symbol = Symbol::X;
        for _ in 0..16 {
            let column = player.choose_column(&board).unwrap();
            assert!(!is_column_full(&board, column));
            board = drop_token(&board, column, symbol).unwrap();
            symbol = symbol.opponent();
        }
        assert!(player.choose_column(&board).is_err());
    }

    #[test]
    fn test_seeded_players_agree() {
        let board = Board::new();
        let mut a = AutoPlayer::seeded(99);
        let mut b = AutoPlayer::seeded(99);
        for _ in 0..8 {
            assert_eq!(a.choose_column(&board), b.choose_column(&board));
        }
    }
}

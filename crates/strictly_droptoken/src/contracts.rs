//! Contract-based validation for Drop Token.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError, MoveTarget};
use crate::invariants::{DropTokenInvariants, InvariantSet};
use crate::rules::{is_cell_playable, is_column_full};
use crate::session::GameSession;
use crate::types::{CELLS, COLUMNS};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The active board is neither won nor drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameAlreadyTerminal` on a finished board.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.current_status().is_terminal() {
            Err(MoveError::GameAlreadyTerminal)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the symbol's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `WrongTurn` when the move's symbol is not active.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        if mov.symbol != session.active_symbol() {
            Err(MoveError::WrongTurn(mov.symbol))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target can take a token under gravity.
pub struct TargetPlayable;

impl TargetPlayable {
    /// Validates a column or cell target against the active board.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        let board = session.current_board();
        match mov.target {
            MoveTarget::Column(column) if column >= COLUMNS => {
                Err(MoveError::InvalidColumn(column))
            }
            MoveTarget::Column(column) if is_column_full(&board, column) => {
                Err(MoveError::ColumnFull(column))
            }
            MoveTarget::Column(_) => Ok(()),
            MoveTarget::Cell(index) if index >= CELLS => Err(MoveError::InvalidCell(index)),
            MoveTarget::Cell(index) if !board.is_empty(index) => {
                Err(MoveError::CellOccupied(index))
            }
            MoveTarget::Cell(index) if !is_cell_playable(&board, index) => {
                Err(MoveError::CellNotPlayable(index))
            }
            MoveTarget::Cell(_) => Ok(()),
        }
    }
}

/// Composite precondition: the game is open, it's the symbol's turn, and
/// the target is playable.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        PlayersTurn::check(mov, session)?;
        TargetPlayable::check(mov, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game not over
/// - Symbol's turn
/// - Target playable
///
/// Postconditions:
/// - History ends exactly one step after the step the move was made from
/// - No floating tokens anywhere in history
/// - Symbols alternate from the first mover
/// - Every history entry adds one token in its recorded column
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        let expected = before.step() + 2;
        if after.history_length() != expected || after.step() != before.step() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history length {} at step {}, expected {} at step {}",
                after.history_length(),
                after.step(),
                expected,
                before.step() + 1
            )));
        }

        DropTokenInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

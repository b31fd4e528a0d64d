//! History consistency invariant: each entry adds exactly the recorded token.

use super::Invariant;
use crate::rules::landing_index;
use crate::session::GameSession;
use crate::types::Cell;

/// Invariant: Every history entry follows from its predecessor.
///
/// Each record's board equals the previous board plus one token of the
/// recorded symbol at the landing cell of the recorded column, and the
/// step pointer points inside the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.step() >= session.history_length() {
            return false;
        }

        session.boards().zip(session.records()).all(|(before, record)| {
            let Some(index) = landing_index(&before, record.column()) else {
                return false;
            };
            let after = record.board();

            after.cells().iter().enumerate().all(|(i, cell)| {
                if i == index {
                    *cell == Cell::Occupied(record.symbol())
                } else {
                    before.get(i) == Some(*cell)
                }
            })
        })
    }

    fn description() -> &'static str {
        "Each history entry adds one token in its recorded column"
    }
}

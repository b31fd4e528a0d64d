//! Alternating turn invariant: symbols alternate starting with the first mover.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: Symbols alternate turns.
///
/// The record made from step `n` belongs to the first mover when `n` is
/// even and to the other symbol when it is odd.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .records()
            .iter()
            .enumerate()
            .all(|(step, record)| record.symbol() == session.symbol_for_step(step))
    }

    fn description() -> &'static str {
        "Symbols alternate turns starting with the first mover"
    }
}

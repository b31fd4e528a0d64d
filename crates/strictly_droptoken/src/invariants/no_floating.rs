//! No floating tokens: every token rests on the bottom row or on another token.

use super::Invariant;
use crate::rules::is_settled;
use crate::session::GameSession;

/// Invariant: Every board in the history is settled.
pub struct NoFloatingTokensInvariant;

impl Invariant<GameSession> for NoFloatingTokensInvariant {
    fn holds(session: &GameSession) -> bool {
        session.boards().all(|board| is_settled(&board))
    }

    fn description() -> &'static str {
        "No token floats above an empty cell"
    }
}

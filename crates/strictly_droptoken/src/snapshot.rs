//! Serializable view of a session for presentation layers.

use crate::types::{Board, GameStatus, Symbol};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw the active state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Board at the step pointer.
    pub board: Board,
    /// Status of that board.
    pub status: GameStatus,
    /// Symbol to move.
    pub active_symbol: Symbol,
    /// The step pointer.
    pub step: usize,
    /// Number of boards in the history.
    pub history_length: usize,
    /// One-line status for display.
    pub status_line: String,
}

#[cfg(test)]
mod tests {
    use crate::{GameSession, MoveTarget, Symbol};

    #[test]
    fn test_snapshot_json_shape() {
        let mut session = GameSession::new();
        session.play(MoveTarget::Column(3)).unwrap();

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["step"], 1);
        assert_eq!(json["history_length"], 2);
        assert_eq!(json["active_symbol"], "O");
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["status_line"], "Next player: O");
        assert_eq!(json["board"]["cells"][15]["Occupied"], "X");
        assert_eq!(json["board"]["cells"][0], "Empty");

        let back = serde_json::from_value(json).unwrap();
        assert_eq!(session.snapshot(), back);
        assert_eq!(session.active_symbol(), Symbol::O);
    }
}

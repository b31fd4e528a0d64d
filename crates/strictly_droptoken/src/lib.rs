//! Strictly Drop Token - type-safe rules for a 4x4 gravity game
//!
//! Two symbols take turns dropping tokens into one of four columns. A token
//! settles into the lowest empty cell of its column; four in a row, column or
//! diagonal wins, and a full board without a line is a draw.
//!
//! # Architecture
//!
//! - **Board Engine**: immutable [`Board`] values and the pure functions in
//!   [`rules`] (gravity, win and draw detection)
//! - **Move Coordinator**: [`GameSession`] sequences turns, keeps the move
//!   history for time travel, and dispatches human and autonomous moves
//! - **Contracts & invariants**: preconditions checked on every move,
//!   session invariants re-checked in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_droptoken::{GameSession, GameStatus, MoveTarget, Symbol};
//!
//! # fn example() -> Result<(), strictly_droptoken::MoveError> {
//! let mut session = GameSession::new();
//! session.play(MoveTarget::Column(0))?;
//! assert_eq!(session.active_symbol(), Symbol::O);
//! assert_eq!(session.current_status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod auto;
mod contracts;
mod invariants;
pub mod rules;
mod session;
mod shared;
mod snapshot;
mod types;

// Crate-level exports - Board Engine types
pub use types::{Board, BoardParseError, CELLS, COLUMNS, Cell, GameStatus, ROWS, Symbol};

// Crate-level exports - Actions
pub use action::{Move, MoveError, MoveRecord, MoveTarget};

// Crate-level exports - Move Coordinator
pub use auto::{AutoPlayer, probe_from};
pub use session::GameSession;
pub use shared::SharedSession;
pub use snapshot::SessionSnapshot;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, TargetPlayable};
pub use invariants::{
    AlternatingTurnInvariant, DropTokenInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, NoFloatingTokensInvariant,
};

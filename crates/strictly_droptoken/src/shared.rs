//! Lock-guarded session for callers that share one game across threads.

use crate::action::{Move, MoveError, MoveRecord};
use crate::auto::AutoPlayer;
use crate::session::GameSession;
use crate::snapshot::SessionSnapshot;
use crate::types::{Board, GameStatus, Symbol};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// A [`GameSession`] behind a single mutex.
///
/// Each method holds the lock for exactly one query or transition. A
/// transition either completes or leaves the session untouched, so a lock
/// poisoned by a panicking caller still guards a consistent session and is
/// recovered.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    /// Creates a shared session with `X` moving first.
    #[instrument]
    pub fn new() -> Self {
        Self::from(GameSession::new())
    }

    fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Board at the step pointer.
    pub fn current_board(&self) -> Board {
        self.lock().current_board()
    }

    /// Status at the step pointer.
    pub fn current_status(&self) -> GameStatus {
        self.lock().current_status()
    }

    /// Symbol to move.
    pub fn active_symbol(&self) -> Symbol {
        self.lock().active_symbol()
    }

    /// Number of boards in the history.
    pub fn history_length(&self) -> usize {
        self.lock().history_length()
    }

    /// Serializable view taken under one lock.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Copy of the whole session.
    pub fn session(&self) -> GameSession {
        self.lock().clone()
    }

    /// See [`GameSession::submit_move`].
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit_move`].
    #[instrument(skip(self))]
    pub fn submit_move(&self, action: Move) -> Result<GameStatus, MoveError> {
        self.lock().submit_move(action)
    }

    /// See [`GameSession::jump_to_step`].
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::jump_to_step`].
    #[instrument(skip(self))]
    pub fn jump_to_step(&self, step: usize) -> Result<GameStatus, MoveError> {
        self.lock().jump_to_step(step)
    }

    /// See [`GameSession::assign_first_mover`].
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::assign_first_mover`].
    #[instrument(skip(self))]
    pub fn assign_first_mover(&self, symbol: Symbol) -> Result<(), MoveError> {
        self.lock().assign_first_mover(symbol)
    }

    /// See [`GameSession::auto_move`].
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::auto_move`].
    #[instrument(skip(self, player))]
    pub fn auto_move(
        &self,
        symbol: Symbol,
        player: &mut AutoPlayer,
    ) -> Result<MoveRecord, MoveError> {
        self.lock().auto_move(symbol, player)
    }
}

impl From<GameSession> for SharedSession {
    fn from(session: GameSession) -> Self {
        debug!(step = session.step(), "Sharing game session");
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{DropTokenInvariants, InvariantSet};
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let a = SharedSession::new();
        let b = a.clone();
        a.submit_move(Move::column(Symbol::X, 0)).unwrap();
        assert_eq!(b.history_length(), 2);
        assert_eq!(b.active_symbol(), Symbol::O);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let shared = SharedSession::new();
        shared.submit_move(Move::column(Symbol::X, 0)).unwrap();

        let holder = shared.clone();
        let joined = thread::spawn(move || {
            let _guard = holder.inner.lock().unwrap();
            panic!("player thread died holding the session");
        })
        .join();
        assert!(joined.is_err());
        assert!(shared.inner.is_poisoned());

        shared.submit_move(Move::column(Symbol::O, 1)).unwrap();
        assert_eq!(shared.current_board().occupied_count(), 2);
        assert_eq!(shared.active_symbol(), Symbol::X);
        assert!(DropTokenInvariants::check_all(&shared.session()).is_ok());
    }

    #[test]
    fn test_two_threads_play_to_the_end() {
        let shared = SharedSession::new();

        let handles: Vec<_> = [(Symbol::X, 11), (Symbol::O, 12)]
            .into_iter()
            .map(|(symbol, seed)| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let mut player = AutoPlayer::seeded(seed);
                    let mut placed = 0;
                    while !shared.current_status().is_terminal() {
                        match shared.auto_move(symbol, &mut player) {
                            Ok(_) => placed += 1,
                            Err(MoveError::WrongTurn(_)) => thread::yield_now(),
                            Err(_) => break,
                        }
                    }
                    placed
                })
            })
            .collect();

        let placed: usize = handles
            .into_iter()
            .map(|h| h.join().expect("player thread panicked"))
            .sum();

        let session = shared.session();
        assert!(session.current_status().is_terminal());
        assert_eq!(placed + 1, session.history_length());
        assert!(DropTokenInvariants::check_all(&session).is_ok());
    }
}

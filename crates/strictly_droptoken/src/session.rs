//! Move coordination: turn sequencing, history and time travel.

use crate::action::{Move, MoveError, MoveRecord, MoveTarget};
use crate::auto::AutoPlayer;
use crate::contracts::{Contract, MoveContract};
use crate::rules::{drop_token, is_full, status_of};
use crate::snapshot::SessionSnapshot;
use crate::types::{Board, GameStatus, Symbol};
use tracing::{debug, info, instrument, warn};

/// A Drop Token game with its full move history.
///
/// The history always starts with the empty board at step 0 and holds one
/// board per accepted move after it. The step pointer selects the active
/// board; jumping back only moves the pointer, and the next move taken
/// from there discards everything after it.
///
/// Whose turn it is and whether the game is over are never stored. Both
/// are derived from the step pointer, the first mover and the active board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    records: Vec<MoveRecord>,
    step: usize,
    first_mover: Symbol,
}

impl GameSession {
    /// Creates a new session with `X` moving first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_first_mover(Symbol::X)
    }

    /// Creates a new session with the given first mover.
    #[instrument]
    pub fn with_first_mover(first_mover: Symbol) -> Self {
        debug!("Creating game session");
        Self {
            records: Vec::new(),
            step: 0,
            first_mover,
        }
    }

    /// Replays a list of columns from the empty board.
    ///
    /// Each column is played by whichever symbol is active at that point.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(first_mover: Symbol, columns: &[usize]) -> Result<Self, MoveError> {
        let mut session = Self::with_first_mover(first_mover);
        for &column in columns {
            session.play(MoveTarget::Column(column))?;
        }
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Board at the step pointer.
    pub fn current_board(&self) -> Board {
        self.board_at(self.step).unwrap_or_default()
    }

    /// Board at any step of the history.
    pub fn board_at(&self, step: usize) -> Option<Board> {
        match step {
            0 => Some(Board::new()),
            n => self.records.get(n - 1).map(|record| *record.board()),
        }
    }

    /// Status derived from the board at the step pointer.
    pub fn current_status(&self) -> GameStatus {
        status_of(&self.current_board())
    }

    /// Symbol whose turn it is at the step pointer.
    pub fn active_symbol(&self) -> Symbol {
        self.symbol_for_step(self.step)
    }

    /// Symbol that moves at step 0.
    pub fn first_mover(&self) -> Symbol {
        self.first_mover
    }

    /// The step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of boards in the history, including the empty start board.
    pub fn history_length(&self) -> usize {
        self.records.len() + 1
    }

    /// Accepted moves, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Every board in the history, starting with the empty board.
    pub fn boards(&self) -> impl Iterator<Item = Board> + '_ {
        std::iter::once(Board::new()).chain(self.records.iter().map(|record| *record.board()))
    }

    /// One-line status for display.
    pub fn status_line(&self) -> String {
        match self.current_status() {
            GameStatus::InProgress => format!("Next player: {}", self.active_symbol()),
            GameStatus::Won(symbol) => format!("Result: Winner: {}", symbol),
            GameStatus::Drawn => "Result: Game Drawn".to_string(),
        }
    }

    /// Labels for every step a caller can jump to.
    pub fn step_labels(&self) -> Vec<String> {
        (0..self.history_length())
            .map(|step| match step {
                0 => "Go to game start".to_string(),
                n => format!("Go to move #{}", n),
            })
            .collect()
    }

    /// Serializable view of the active state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.current_board(),
            status: self.current_status(),
            active_symbol: self.active_symbol(),
            step: self.step,
            history_length: self.history_length(),
            status_line: self.status_line(),
        }
    }

    pub(crate) fn symbol_for_step(&self, step: usize) -> Symbol {
        if step % 2 == 0 {
            self.first_mover
        } else {
            self.first_mover.opponent()
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Submits a move and returns the resulting status.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (`LegalMove`)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Any precondition failure. The session is unchanged on error.
    #[instrument(skip(self), fields(step = self.step, active = %self.active_symbol()))]
    pub fn submit_move(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, %action, "Move rejected");
            return Err(e);
        }

        let column = action.target.column();
        let board = drop_token(&self.current_board(), column, action.symbol)?;

        // Branching from an earlier step discards the old future.
        if self.records.len() > self.step {
            debug!(
                discarded = self.records.len() - self.step,
                "Truncating history before new move"
            );
        }
        self.records.truncate(self.step);
        self.records.push(MoveRecord::new(board, column, action.symbol));
        self.step = self.records.len();

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, self) {
                warn!(error = %e, "Postcondition failed, rolling back");
                *self = before;
                return Err(e);
            }
        }

        let status = self.current_status();
        info!(%action, column, step = self.step, ?status, "Move accepted");
        Ok(status)
    }

    /// Submits a move on behalf of the active symbol.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit_move`].
    pub fn play(&mut self, target: MoveTarget) -> Result<GameStatus, MoveError> {
        self.submit_move(Move::new(self.active_symbol(), target))
    }

    /// Moves the step pointer to `step` and returns the status there.
    ///
    /// The history is kept intact, so jumping back out of a finished game
    /// reopens it.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidStepIndex`] if `step` is past the end of history.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to_step(&mut self, step: usize) -> Result<GameStatus, MoveError> {
        if step >= self.history_length() {
            warn!(history_length = self.history_length(), "Jump out of range");
            return Err(MoveError::InvalidStepIndex(step));
        }

        self.step = step;
        let status = self.current_status();
        debug!(active = %self.active_symbol(), ?status, "Jumped");
        Ok(status)
    }

    /// Chooses which symbol moves first.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPhase`] once any move has been made.
    #[instrument(skip(self))]
    pub fn assign_first_mover(&mut self, symbol: Symbol) -> Result<(), MoveError> {
        if self.step != 0 || !self.records.is_empty() {
            warn!(step = self.step, "First mover assigned after game start");
            return Err(MoveError::InvalidPhase);
        }

        self.first_mover = symbol;
        debug!("First mover assigned");
        Ok(())
    }

    /// Lets `player` choose a column for `symbol` and plays it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::BoardFull`] if no column is open
    /// - [`MoveError::GameAlreadyTerminal`] if the game is won
    /// - [`MoveError::WrongTurn`] if `symbol` is not active
    #[instrument(skip(self, player), fields(step = self.step))]
    pub fn auto_move(
        &mut self,
        symbol: Symbol,
        player: &mut AutoPlayer,
    ) -> Result<MoveRecord, MoveError> {
        let board = self.current_board();
        if is_full(&board) {
            warn!("Autonomous move requested on a full board");
            return Err(MoveError::BoardFull);
        }
        if self.current_status().is_terminal() {
            warn!("Autonomous move requested after game end");
            return Err(MoveError::GameAlreadyTerminal);
        }
        if symbol != self.active_symbol() {
            warn!(active = %self.active_symbol(), "Autonomous move out of turn");
            return Err(MoveError::WrongTurn(symbol));
        }

        let column = player.choose_column(&board)?;
        self.submit_move(Move::column(symbol, column))?;

        self.records.last().copied().ok_or_else(|| {
            MoveError::InvariantViolation("accepted move left no record".to_string())
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(records: Vec<MoveRecord>, step: usize, first_mover: Symbol) -> Self {
        Self {
            records,
            step,
            first_mover,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

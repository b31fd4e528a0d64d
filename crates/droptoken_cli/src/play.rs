//! Interactive game loop and rendering.

use crate::command::{HELP, PlayerCommand};
use crate::config::PlayConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_droptoken::{AutoPlayer, GameSession, MoveError, MoveTarget, Symbol};
use tracing::{debug, info, instrument, warn};

/// Writes the active board and status, as text or as a JSON snapshot.
pub fn render<W: Write>(session: &GameSession, json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(&session.snapshot())?)?;
    } else {
        writeln!(out, "{}", session.current_board())?;
        writeln!(out, "{}", session.status_line())?;
    }
    Ok(())
}

/// Plays one game, reading commands from `input` until `quit` or end of
/// input, and returns the final session.
///
/// The computer seat moves by itself whenever it is its turn, except at
/// the start of the game and right after a `jump`. At the start the player
/// may still take the first move with `first`; after a jump the history is
/// left intact until the player moves or types `auto`.
#[instrument(skip(input, out))]
pub fn run<R: BufRead, W: Write>(
    config: &PlayConfig,
    json: bool,
    input: R,
    mut out: W,
) -> Result<GameSession> {
    let mut session = GameSession::with_first_mover(*config.first_mover());
    let mut computer = match config.seed() {
        Some(seed) => AutoPlayer::seeded(*seed),
        None => AutoPlayer::new(),
    };
    let seat = config.computer_seat();
    info!(?seat, first_mover = %session.first_mover(), "Starting game");

    render(&session, json, &mut out)?;
    let mut lines = input.lines();
    let mut browsing = false;

    loop {
        if !browsing && computers_turn(&session, seat) {
            let symbol = session.active_symbol();
            let record = session.auto_move(symbol, &mut computer)?;
            writeln!(out, "{} drops into column {}", symbol, record.column())?;
            render(&session, json, &mut out)?;
            continue;
        }
        if session.step() == 0 && seat == Some(session.active_symbol()) {
            writeln!(
                out,
                "Type auto to let {} open, or first {} to move first.",
                session.active_symbol(),
                session.active_symbol().opponent()
            )?;
        } else if browsing && computers_turn(&session, seat) {
            writeln!(
                out,
                "Type auto to let {} move from here, or jump to another step.",
                session.active_symbol()
            )?;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            debug!("Input closed");
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<PlayerCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Command read");

        let result: Result<(), MoveError> = match command {
            PlayerCommand::Drop(column) => session.play(MoveTarget::Column(column)).map(drop),
            PlayerCommand::Cell(index) => session.play(MoveTarget::Cell(index)).map(drop),
            PlayerCommand::Auto => session
                .auto_move(session.active_symbol(), &mut computer)
                .map(drop),
            PlayerCommand::Jump(step) => session.jump_to_step(step).map(drop),
            PlayerCommand::First(symbol) => session.assign_first_mover(symbol),
            PlayerCommand::History => {
                for label in session.step_labels() {
                    writeln!(out, "{}", label)?;
                }
                continue;
            }
            PlayerCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            PlayerCommand::Quit => break,
        };

        match result {
            Ok(()) => {
                browsing = matches!(command, PlayerCommand::Jump(_));
                render(&session, json, &mut out)?;
            }
            Err(e) => {
                warn!(error = %e, "Command rejected");
                writeln!(out, "Rejected: {}", e)?;
            }
        }
    }

    info!(status = ?session.current_status(), moves = session.step(), "Game finished");
    Ok(session)
}

fn computers_turn(session: &GameSession, seat: Option<Symbol>) -> bool {
    session.step() > 0
        && seat == Some(session.active_symbol())
        && !session.current_status().is_terminal()
}

/// Replays `columns` from the empty board and renders the result.
///
/// # Errors
///
/// Fails with the first rejected column.
#[instrument(skip(out))]
pub fn run_replay<W: Write>(
    first_mover: Symbol,
    columns: &[usize],
    json: bool,
    mut out: W,
) -> Result<GameSession> {
    let session = GameSession::replay(first_mover, columns)?;
    render(&session, json, &mut out)?;
    Ok(session)
}

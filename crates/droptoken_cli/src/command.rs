//! Line commands typed at the game prompt.

use std::str::FromStr;
use strictly_droptoken::Symbol;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Drop into a column (`2` or `drop 2`).
    Drop(usize),
    /// Click a cell (`cell 13`).
    Cell(usize),
    /// Let the computer pick for the active symbol.
    Auto,
    /// Jump to a history step (`jump 0`).
    Jump(usize),
    /// Choose who moves first (`first o`).
    First(Symbol),
    /// List the steps that can be jumped to.
    History,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  0-3 | drop N   drop a token into column N
  cell N         drop by clicking cell N (0-15)
  auto           let the computer choose for the player to move
  jump N         go back to history step N
  first x|o      choose who moves first (before any move)
  history        list history steps
  help           show this list
  quit           leave the game";

/// Error parsing a player command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,

    /// The command word is unknown.
    #[display("Unknown command {:?}; type help for a list", _0)]
    Unknown(String),

    /// A required argument is missing.
    #[display("{} needs an argument", _0)]
    MissingArgument(&'static str),

    /// An argument is not a number.
    #[display("{:?} is not a number", _0)]
    BadNumber(String),

    /// An argument is not a symbol.
    #[display("{:?} is not a symbol (x or o)", _0)]
    BadSymbol(String),
}

impl std::error::Error for CommandError {}

fn number(word: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(word))?;
    arg.parse()
        .map_err(|_| CommandError::BadNumber(arg.to_string()))
}

impl FromStr for PlayerCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();

        if let Ok(column) = head.parse::<usize>() {
            return Ok(PlayerCommand::Drop(column));
        }

        match head.to_ascii_lowercase().as_str() {
            "drop" | "d" => number("drop", arg).map(PlayerCommand::Drop),
            "cell" | "c" => number("cell", arg).map(PlayerCommand::Cell),
            "jump" | "j" => number("jump", arg).map(PlayerCommand::Jump),
            "first" => {
                let arg = arg.ok_or(CommandError::MissingArgument("first"))?;
                arg.parse::<Symbol>()
                    .map(PlayerCommand::First)
                    .map_err(|_| CommandError::BadSymbol(arg.to_string()))
            }
            "auto" | "a" => Ok(PlayerCommand::Auto),
            "history" | "h" => Ok(PlayerCommand::History),
            "help" | "?" => Ok(PlayerCommand::Help),
            "quit" | "q" | "exit" => Ok(PlayerCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

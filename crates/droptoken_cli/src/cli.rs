//! Command-line interface for droptoken.

use clap::{Parser, Subcommand};
use strictly_droptoken::Symbol;

/// Drop Token - connect four on a 4x4 board
#[derive(Parser, Debug)]
#[command(name = "droptoken")]
#[command(about = "Drop Token on a 4x4 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to droptoken.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Symbol that moves first (x or o)
        #[arg(long)]
        first: Option<Symbol>,

        /// Symbol the computer plays (x or o)
        #[arg(long)]
        computer: Option<Symbol>,

        /// Disable the computer seat; both symbols are entered by hand
        #[arg(long)]
        human_only: bool,

        /// Seed for the computer's column choice
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON snapshots instead of the text board
        #[arg(long)]
        json: bool,
    },

    /// Replay a comma-separated column list and print the result
    Replay {
        /// Columns in play order, e.g. 0,1,1,2
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Symbol that moves first (x or o)
        #[arg(long)]
        first: Option<Symbol>,

        /// Print a JSON snapshot instead of the text board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::parse_from(["droptoken", "play", "--first", "o", "--seed", "7"]);
        match cli.command {
            Command::Play {
                first, seed, json, ..
            } => {
                assert_eq!(first, Some(Symbol::O));
                assert_eq!(seed, Some(7));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_replay_moves() {
        let cli = Cli::parse_from([
            "droptoken", "--config", "a.toml", "replay", "--moves", "0,1,3",
        ]);
        assert_eq!(cli.config, Some(std::path::PathBuf::from("a.toml")));
        match cli.command {
            Command::Replay { moves, .. } => assert_eq!(moves, vec![0, 1, 3]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_symbol_rejected() {
        assert!(Cli::try_parse_from(["droptoken", "play", "--first", "z"]).is_err());
    }
}

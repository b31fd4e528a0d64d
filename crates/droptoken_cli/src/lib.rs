//! Terminal driver for Drop Token.
//!
//! Plays the presentation role around [`strictly_droptoken`]: it reads
//! commands from a line-oriented input, forwards them to a
//! [`GameSession`](strictly_droptoken::GameSession) and renders the board,
//! status and history labels it reads back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod play;

pub use cli::{Cli, Command};
pub use command::{CommandError, PlayerCommand};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, PlayConfig};
pub use play::{render, run, run_replay};

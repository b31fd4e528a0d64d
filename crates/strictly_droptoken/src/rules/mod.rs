//! Game rules for Drop Token.
//!
//! This module contains pure functions for evaluating board state
//! according to Drop Token rules. Rules are separated from board
//! storage and from turn sequencing so they compose into contracts.

pub mod draw;
pub mod gravity;
pub mod win;

pub use draw::{is_draw, is_full, status_of};
pub use gravity::{drop_token, is_cell_playable, is_column_full, is_settled, landing_index};
pub use win::{LINES, check_winner};

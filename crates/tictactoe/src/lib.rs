//! Terminal tic-tac-toe for two local players.
//!
//! # Architecture
//!
//! - **Engine**: [`tictactoe_core`] holds the rules; this crate never mutates
//!   a board directly.
//! - **TUI**: ratatui/crossterm front end that swaps in the state returned by
//!   each move.
//! - **Replay**: prints the result of a move list without a terminal UI.
//! - **Config**: optional TOML file plus CLI flags.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use replay::ReplayError;

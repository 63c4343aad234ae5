//! Tic-tac-toe rules engine.
//!
//! The engine is a set of pure functions over an immutable [`GameState`]
//! value. Callers hold the current state and replace it with whatever
//! [`GameState::apply_move`] returns; nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Player, Position, evaluate};
//!
//! let state = GameState::replay(&[
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ])
//! .unwrap();
//!
//! match evaluate(state.board()) {
//!     Outcome::Winner { player, line } => {
//!         assert_eq!(player, Player::X);
//!         assert_eq!(line.map(Position::to_index), [0, 1, 2]);
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use game::{GameState, InvalidGameState, reset};
pub use position::Position;
pub use rules::{LINES, Outcome, evaluate};
pub use types::{Board, Player, Square};

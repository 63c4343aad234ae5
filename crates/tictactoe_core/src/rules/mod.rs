//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the same checks back both move application and invariants.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner};

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Derived status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one square is open.
    InProgress,
    /// A player has three in a row.
    Winner {
        /// The winning mark.
        player: Player,
        /// The first completed line in scan order.
        line: [Position; 3],
    },
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates the board.
///
/// Lines are scanned rows top-to-bottom, columns left-to-right, then the
/// main and anti diagonals; the first complete line wins. A full board with
/// no complete line is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Winner { player, line }
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_row_scanned_before_column() {
        // Not reachable by legal play: X owns both the top row and left column.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(
            outcome.line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_on_full_board_is_not_draw() {
        // X X X / O O X / X O O
        let marks = [0, 0, 0, 1, 1, 0, 0, 1, 1];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip(marks) {
            let player = if mark == 0 { Player::X } else { Player::O };
            board.set(*pos, Square::Occupied(player));
        }
        assert!(matches!(evaluate(&board), Outcome::Winner { player: Player::X, .. }));
    }
}

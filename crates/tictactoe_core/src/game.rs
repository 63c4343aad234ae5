//! Game state and its transition function.

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::rules::{Outcome, evaluate};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Immutable snapshot of a game: board, player to move, and move history.
///
/// The caller owns the current value and swaps it for the one returned by
/// [`GameState::apply_move`]. Outcome is derived on demand, never stored.
/// Deserialized states must satisfy every invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) history: Vec<Position>,
}

/// Wire shape of [`GameState`] before validation.
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    turn: Player,
    history: Vec<Position>,
}

/// A decoded state that could not have been reached by legal play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGameState {
    /// Every invariant the state breaks.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for InvalidGameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptions: Vec<_> = self
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect();
        write!(f, "Invalid game state: {}", descriptions.join("; "))
    }
}

impl std::error::Error for InvalidGameState {}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidGameState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            board: raw.board,
            turn: raw.turn,
            history: raw.history,
        };
        TicTacToeInvariants::check_all(&state)
            .map_err(|violations| InvalidGameState { violations })?;
        Ok(state)
    }
}

/// Returns the initial state: empty board, X to move.
#[instrument]
pub fn reset() -> GameState {
    GameState::new()
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns the next state, leaving `self` untouched. A finished game is
    /// rejected before the square is looked at.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the board has a winner or is full.
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    #[instrument(skip(self), fields(position = %pos, player = %self.turn))]
    pub fn apply_move(&self, pos: Position) -> Result<GameState, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(self.turn));
        next.history.push(pos);
        next.turn = self.turn.opponent();

        debug_assert!(
            TicTacToeInvariants::check_all(&next).is_ok(),
            "invariants violated after {pos}"
        );
        debug!(outcome = ?next.outcome(), "Move applied");
        Ok(next)
    }

    /// Like [`GameState::apply_move`], taking a raw board index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices above 8, otherwise as
    /// [`GameState::apply_move`].
    pub fn apply_move_index(&self, index: usize) -> Result<GameState, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Applies a move, or returns the state unchanged if it is illegal.
    pub fn play(self, pos: Position) -> GameState {
        match self.apply_move(pos) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Ignoring illegal move");
                self
            }
        }
    }

    /// Rebuilds a game from a sequence of positions, starting from [`reset`].
    ///
    /// # Errors
    ///
    /// Returns the error of the first illegal move.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(GameState::new(), |state, pos| state.apply_move(*pos))
    }

    /// Status text for the current state.
    ///
    /// One of `Current player: X`, `Current player: O`, `Winner: X`,
    /// `Winner: O` or `It's a draw!`.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!("Current player: {}", self.turn),
            Outcome::Winner { player, .. } => format!("Winner: {player}"),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_x_to_move() {
        let state = GameState::new();
        assert_eq!(state.turn(), Player::X);
        assert!(state.history().is_empty());
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_apply_move_flips_turn() {
        let state = GameState::new().apply_move(Position::Center).unwrap();
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.turn(), Player::O);
        assert_eq!(state.history(), &[Position::Center]);
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let state = GameState::new();
        let _next = state.apply_move(Position::Center).unwrap();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_game_over_checked_before_occupied() {
        let state = GameState::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        assert_eq!(state.apply_move(Position::TopLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_out_of_bounds_index() {
        assert_eq!(
            GameState::new().apply_move_index(9),
            Err(MoveError::OutOfBounds(9))
        );
        assert!(GameState::new().apply_move_index(8).is_ok());
    }

    #[test]
    fn test_play_ignores_illegal_move() {
        let state = GameState::new().play(Position::Center);
        let same = state.clone().play(Position::Center);
        assert_eq!(same, state);
    }

    #[test]
    fn test_deserialize_rejects_untracked_mark() {
        let json = r#"{"board":{"squares":[{"Occupied":"X"},"Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]},"turn":"X","history":[]}"#;
        let err = serde_json::from_str::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("Board matches the replay of move history"));
    }

    #[test]
    fn test_deserialize_rejects_wrong_turn() {
        let json = r#"{"board":{"squares":["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]},"turn":"O","history":[]}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialized_state_accepts_moves() {
        let state = GameState::replay(&[Position::Center, Position::TopLeft]).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(back.apply_move(Position::BottomRight).is_ok());
    }

    #[test]
    fn test_status_lines() {
        let state = GameState::new();
        assert_eq!(state.status_line(), "Current player: X");
        let state = state.play(Position::Center);
        assert_eq!(state.status_line(), "Current player: O");
    }
}

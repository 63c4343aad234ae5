//! Non-interactive replay of a move list.

use derive_more::Display;
use tictactoe_core::{GameState, MoveError, Position};
use tracing::{info, instrument};

/// Why a move list could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ReplayError {
    /// An argument is neither an index 0-8 nor a position label.
    #[display("Move {}: unknown position {:?}", ply, input)]
    UnknownPosition {
        /// 1-based move number.
        ply: usize,
        /// The offending argument.
        input: String,
    },

    /// The engine rejected a move.
    #[display("Move {}: {}", ply, error)]
    Illegal {
        /// 1-based move number.
        ply: usize,
        /// Engine rejection.
        error: MoveError,
    },
}

impl std::error::Error for ReplayError {}

/// Parses arguments into positions.
pub fn parse_moves<S: AsRef<str>>(args: &[S]) -> Result<Vec<Position>, ReplayError> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            Position::from_label_or_number(arg.as_ref()).ok_or_else(|| {
                ReplayError::UnknownPosition {
                    ply: i + 1,
                    input: arg.as_ref().to_string(),
                }
            })
        })
        .collect()
}

/// Applies `moves` from a fresh game, reporting which move failed.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position]) -> Result<GameState, ReplayError> {
    let state = moves
        .iter()
        .enumerate()
        .try_fold(GameState::new(), |state, (i, pos)| {
            state
                .apply_move(*pos)
                .map_err(|error| ReplayError::Illegal { ply: i + 1, error })
        })?;
    info!(status = %state.status_line(), "Replay finished");
    Ok(state)
}

/// Board text followed by a blank line and the status line.
pub fn render(state: &GameState) -> String {
    format!("{}\n\n{}", state.board().display(), state.status_line())
}

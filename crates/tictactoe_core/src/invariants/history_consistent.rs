//! History consistency invariant: the board is exactly the replay of history.

use super::super::{GameState, Player, Square};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every history entry is a distinct square holding the mark of
/// the player who moved at that ply, and no other square is occupied.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let distinct: HashSet<_> = history.iter().collect();
        if distinct.len() != history.len() {
            return false;
        }

        let marks_match = history.iter().enumerate().all(|(ply, pos)| {
            let mover = if ply % 2 == 0 { Player::X } else { Player::O };
            state.board().get(*pos) == Square::Occupied(mover)
        });

        let occupied = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        marks_match && occupied == history.len()
    }

    fn description() -> &'static str {
        "Board matches the replay of move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_replayed_game_holds() {
        let state = GameState::replay(&[Position::Center, Position::TopLeft]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_untracked_mark_violates() {
        let mut state = GameState::new().play(Position::Center);
        state.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut state = GameState::new().play(Position::Center);
        state.history.push(Position::Center);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut state = GameState::new().play(Position::Center);
        state.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}

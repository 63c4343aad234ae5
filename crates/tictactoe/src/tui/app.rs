//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crate::Config;
use crossterm::event::KeyCode;
use tictactoe_core::{GameState, Position, reset};
use tracing::{debug, info, instrument};

/// Terminal UI state: the current game plus view-only settings.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &Config) -> Self {
        Self {
            game: reset(),
            cursor: Position::Center,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Position highlighted by the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their key number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.place(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Illegal moves leave the game as it was.
    #[instrument(skip(self), fields(player = %self.game.turn()))]
    pub fn place(&mut self, pos: Position) {
        self.cursor = pos;
        match self.game.apply_move(pos) {
            Ok(next) => {
                info!(position = %pos, status = %next.status_line(), "Move played");
                self.game = next;
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = reset();
        self.cursor = Position::Center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Player, Square};

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_digit_places_mark() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(app.game().turn(), Player::O);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().board().get(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        let before = app.game().clone();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}

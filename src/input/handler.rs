use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Faster,
    Slower,
    Restart,
    Quit,
    None,
}

/// Turns allowed from each heading. Only the two turns across the current
/// axis are listed, so straight-on and reverse requests never match.
const TURNS: [(Direction, [Direction; 2]); 4] = [
    (Direction::Up, [Direction::Left, Direction::Right]),
    (Direction::Down, [Direction::Left, Direction::Right]),
    (Direction::Left, [Direction::Up, Direction::Down]),
    (Direction::Right, [Direction::Up, Direction::Down]),
];

/// Look up whether `requested` is a legal turn while heading `current`
pub fn turn(current: Direction, requested: Direction) -> Option<Direction> {
    TURNS
        .iter()
        .find(|(heading, _)| *heading == current)
        .and_then(|(_, allowed)| allowed.iter().copied().find(|d| *d == requested))
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent, current: Direction) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let requested = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
            KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
            KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
            KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => return KeyAction::Restart,
            KeyCode::Char('+') | KeyCode::Char('=') => return KeyAction::Faster,
            KeyCode::Char('-') | KeyCode::Char('_') => return KeyAction::Slower,

            _ => return KeyAction::None,
        };

        turn(current, requested).map_or(KeyAction::None, KeyAction::Turn)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

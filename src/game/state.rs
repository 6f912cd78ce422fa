use super::{apple::Apple, grid::Grid, snake::Snake};

/// Why the snake went back to a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// Snake hit itself
    SelfCollision,
    /// Snake filled the board and the apple could not be placed
    BoardFull,
    /// Player asked for a new round
    Manual,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub grid: Grid,
    /// Ticks played since start
    pub ticks: u64,
    /// Rounds ended by a reset
    pub resets: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apple: Apple, grid: Grid) -> Self {
        Self {
            snake,
            apple,
            grid,
            ticks: 0,
            resets: 0,
        }
    }
}

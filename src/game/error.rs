use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Every cell is covered by the snake, so the apple has nowhere to go
    #[error("no free cell left for the apple ({cells} cells occupied)")]
    BoardFull { cells: usize },
}

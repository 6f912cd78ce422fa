//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The board is a torus: the snake leaves one edge and comes back on the opposite one.

pub mod apple;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod snake;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use apple::Apple;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepResult};
pub use error::GameError;
pub use grid::{Grid, Position};
pub use snake::Snake;
pub use speed::TickRate;
pub use state::{GameState, ResetCause};

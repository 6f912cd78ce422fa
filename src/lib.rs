//! Torus Snake - a terminal Snake game on a wraparound board
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard input mapping (input module)
//! - Retained cell buffer and TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;

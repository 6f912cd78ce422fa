//! Drawing for the two kinds of things on the board.
//!
//! Per tick only the changes are painted: the new head, the freed tail cell
//! and the apple. A reset wipes the board first.

use crate::game::{Apple, GameState, Position, Snake, StepResult};

use super::canvas::{APPLE_COLOR, Canvas, SNAKE_COLOR};

pub fn draw_apple<C: Canvas>(canvas: &mut C, apple: &Apple) {
    canvas.fill_cell(apple.position, APPLE_COLOR, true);
}

/// Paint the head and erase the cell the tail just left
pub fn draw_snake<C: Canvas>(canvas: &mut C, snake: &Snake, vacated: Option<Position>) {
    if let Some(tail) = vacated {
        canvas.erase_cell(tail);
    }
    canvas.fill_cell(snake.head(), SNAKE_COLOR, true);
}

/// Apply one tick's changes to the canvas.
///
/// The apple goes on last: it may have respawned onto the freed tail cell.
pub fn draw_step<C: Canvas>(canvas: &mut C, state: &GameState, step: &StepResult) {
    if step.reset.is_some() {
        canvas.clear();
    }
    draw_snake(canvas, &state.snake, step.vacated);
    draw_apple(canvas, &state.apple);
}

/// Repaint everything from scratch
pub fn draw_all<C: Canvas>(canvas: &mut C, state: &GameState) {
    canvas.clear();
    for segment in &state.snake.positions {
        canvas.fill_cell(*segment, SNAKE_COLOR, true);
    }
    draw_apple(canvas, &state.apple);
}

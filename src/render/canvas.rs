use ratatui::style::Color;

use crate::game::{Grid, Position};

pub const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
pub const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// What a single board cell currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Empty,
    Filled { color: Color, outlined: bool },
}

/// Surface the game draws onto, one grid cell at a time
pub trait Canvas {
    /// Paint a cell, optionally with a border around it
    fn fill_cell(&mut self, pos: Position, color: Color, outlined: bool);

    /// Paint a cell back to the background
    fn erase_cell(&mut self, pos: Position);

    /// Wipe the whole board
    fn clear(&mut self);
}

/// Retained board image. Cells keep their paint until drawn over,
/// so each tick only has to touch what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBuffer {
    grid: Grid,
    cells: Vec<Paint>,
}

impl CellBuffer {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![Paint::Empty; grid.cell_count()],
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Paint at `pos`; off-board positions read as empty
    pub fn get(&self, pos: Position) -> Paint {
        self.index(pos)
            .map_or(Paint::Empty, |index| self.cells[index])
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.grid
            .contains(pos)
            .then(|| pos.y as usize * self.grid.width + pos.x as usize)
    }

    fn set(&mut self, pos: Position, paint: Paint) {
        if let Some(index) = self.index(pos) {
            self.cells[index] = paint;
        }
    }
}

impl Canvas for CellBuffer {
    fn fill_cell(&mut self, pos: Position, color: Color, outlined: bool) {
        self.set(pos, Paint::Filled { color, outlined });
    }

    fn erase_cell(&mut self, pos: Position) {
        self.set(pos, Paint::Empty);
    }

    fn clear(&mut self) {
        self.cells.fill(Paint::Empty);
    }
}

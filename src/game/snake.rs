use super::{
    direction::Direction,
    grid::{Grid, Position},
};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub positions: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Turn requested since the last tick
    pub next_direction: Option<Direction>,
    /// Target body length; the body catches up on the next advance
    pub length: usize,
}

impl Snake {
    /// Create a one-cell snake at `head`
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            positions: vec![head],
            direction,
            next_direction: None,
            length: 1,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.positions[0]
    }

    /// Queue a turn for the next tick. A reversal is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.next_direction = Some(direction);
        }
    }

    /// Make the queued turn current
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Cell the head moves into on the next advance
    pub fn next_head(&self, grid: &Grid) -> Position {
        grid.step(self.head(), self.direction)
    }

    /// True if `pos` hits the body from the third segment on.
    ///
    /// The segment right behind the head can't be reached by a single step
    /// and is skipped, as is the head itself.
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.positions.iter().skip(2).any(|segment| *segment == pos)
    }

    /// Move one cell forward. Returns the vacated tail cell, if any.
    pub fn advance(&mut self, grid: &Grid) -> Option<Position> {
        let new_head = self.next_head(grid);
        self.positions.insert(0, new_head);

        if self.positions.len() > self.length {
            self.positions.pop()
        } else {
            None
        }
    }

    /// Keep the tail on the next advance
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Shrink back to a single cell at `center`
    pub fn reset(&mut self, center: Position, direction: Direction) {
        self.length = 1;
        self.positions.clear();
        self.positions.push(center);
        self.direction = direction;
        self.next_direction = None;
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

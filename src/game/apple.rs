use rand::{Rng, seq::SliceRandom};

use super::{
    error::GameError,
    grid::{Grid, Position},
};

/// Random draws before falling back to scanning the board for free cells
pub const MAX_SAMPLE_ATTEMPTS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    /// Place a new apple on a cell not in `occupied`
    pub fn spawn<R: Rng + ?Sized>(
        occupied: &[Position],
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        Ok(Self {
            position: free_cell(occupied, grid, rng)?,
        })
    }

    /// Move to a uniformly random cell outside `occupied`.
    ///
    /// On `BoardFull` the apple stays where it was.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        occupied: &[Position],
        grid: &Grid,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.position = free_cell(occupied, grid, rng)?;
        Ok(())
    }
}

fn free_cell<R: Rng + ?Sized>(
    occupied: &[Position],
    grid: &Grid,
    rng: &mut R,
) -> Result<Position, GameError> {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let x = rng.gen_range(0..grid.width) as i32;
        let y = rng.gen_range(0..grid.height) as i32;
        let pos = Position::new(x, y);

        if !occupied.contains(&pos) {
            return Ok(pos);
        }
    }

    // Board is nearly full: pick among what's left
    let free: Vec<Position> = grid.cells().filter(|c| !occupied.contains(c)).collect();
    free.choose(rng).copied().ok_or(GameError::BoardFull {
        cells: grid.cell_count(),
    })
}

use super::{grid::Grid, speed::TickRate};

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;
/// Side of one cell, in pixels
pub const CELL_SIZE: u32 = 20;
pub const GRID_WIDTH: usize = (SCREEN_WIDTH / CELL_SIZE) as usize;
pub const GRID_HEIGHT: usize = (SCREEN_HEIGHT / CELL_SIZE) as usize;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Cell size in pixels, used when reporting pixel coordinates
    pub cell_size: u32,
    /// Speed the loop starts at
    pub initial_tick_rate: TickRate,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            initial_tick_rate: TickRate::default(),
        }
    }
}

impl GameConfig {
    /// Default board with a custom starting speed
    pub fn with_tick_rate(tps: u32) -> Self {
        Self {
            initial_tick_rate: TickRate::new(tps),
            ..Default::default()
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.initial_tick_rate.tps(), 20);
    }

    #[test]
    fn test_custom_speed_is_clamped() {
        let config = GameConfig::with_tick_rate(500);
        assert_eq!(config.initial_tick_rate.tps(), TickRate::MAX);
        assert_eq!(config.grid(), Grid::new(32, 24));
    }
}

use rand::{Rng, rngs::ThreadRng};
use tracing::{debug, info, warn};

use super::{
    apple::Apple,
    config::GameConfig,
    direction::Direction,
    error::GameError,
    grid::Position,
    snake::Snake,
    state::{GameState, ResetCause},
};

/// What changed during one tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Tail cell freed by the move, to be erased on screen
    pub vacated: Option<Position>,
    /// Set when the snake went back to a single cell this tick
    pub reset: Option<ResetCause>,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Engine drawing randomness from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Fresh game: one-cell snake at the center heading right, apple elsewhere
    pub fn new_game(&mut self) -> Result<GameState, GameError> {
        let grid = self.config.grid();
        let snake = Snake::new(grid.center(), Direction::Right);
        let apple = Apple::spawn(&snake.positions, &grid, &mut self.rng)?;

        info!(
            width = grid.width,
            height = grid.height,
            start = ?snake.head().to_pixels(self.config.cell_size),
            "new game"
        );

        Ok(GameState::new(snake, apple, grid))
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        state.ticks += 1;
        state.snake.apply_pending_direction();

        let new_head = state.snake.next_head(&state.grid);
        if state.snake.collides_with_body(new_head) {
            info!(length = state.snake.length, "snake ran into itself");
            self.reset_snake(state, ResetCause::SelfCollision);

            return StepResult {
                ate_apple: false,
                vacated: None,
                reset: Some(ResetCause::SelfCollision),
            };
        }

        let vacated = state.snake.advance(&state.grid);

        if state.snake.head() != state.apple.position {
            return StepResult {
                ate_apple: false,
                vacated,
                reset: None,
            };
        }

        state.snake.grow();
        debug!(length = state.snake.length, "apple eaten");

        let respawned = state.apple.respawn(&state.snake.positions, &state.grid, &mut self.rng);
        if let Err(err) = respawned {
            warn!(%err, "starting a new round");
            self.reset_snake(state, ResetCause::BoardFull);

            return StepResult {
                ate_apple: true,
                vacated: None,
                reset: Some(ResetCause::BoardFull),
            };
        }

        StepResult {
            ate_apple: true,
            vacated,
            reset: None,
        }
    }

    /// Start a new round on request, keeping counters
    pub fn restart(&mut self, state: &mut GameState) {
        self.reset_snake(state, ResetCause::Manual);
    }

    fn reset_snake(&mut self, state: &mut GameState, cause: ResetCause) {
        let direction = Direction::random(&mut self.rng);
        state.snake.reset(state.grid.center(), direction);
        state.resets += 1;
        debug!(?cause, ?direction, "snake reset");

        if state.snake.occupies(state.apple.position) {
            let snake = &state.snake.positions;
            if let Err(err) = state.apple.respawn(snake, &state.grid, &mut self.rng) {
                warn!(%err, "apple left under the snake");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Grid;
    use rand::{SeedableRng, rngs::StdRng};

    fn engine(seed: u64) -> GameEngine<StdRng> {
        GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(seed))
    }

    fn state_with_body(body: &[(i32, i32)], direction: Direction, apple: (i32, i32)) -> GameState {
        let positions: Vec<_> = body.iter().map(|&(x, y)| Position::new(x, y)).collect();
        let snake = Snake {
            length: positions.len(),
            positions,
            direction,
            next_direction: None,
        };
        GameState::new(
            snake,
            Apple {
                position: Position::new(apple.0, apple.1),
            },
            Grid::new(32, 24),
        )
    }

    #[test]
    fn test_new_game() {
        let mut engine = engine(1);
        let state = engine.new_game().unwrap();

        assert_eq!(state.snake.positions, vec![Position::new(16, 12)]);
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.length, 1);
        assert_ne!(state.apple.position, state.snake.head());
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine(2);
        let mut state = state_with_body(&[(16, 12)], Direction::Right, (0, 0));

        let result = engine.step(&mut state);

        assert_eq!(state.snake.head(), Position::new(17, 12));
        assert_eq!(result.vacated, Some(Position::new(16, 12)));
        assert!(!result.ate_apple);
        assert_eq!(result.reset, None);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_pending_turn_applied_before_move() {
        let mut engine = engine(3);
        let mut state = state_with_body(&[(16, 12)], Direction::Right, (0, 0));
        state.snake.set_pending_direction(Direction::Up);

        engine.step(&mut state);

        assert_eq!(state.snake.head(), Position::new(16, 11));
        assert_eq!(state.snake.next_direction, None);
    }

    #[test]
    fn test_apple_consumption() {
        let mut engine = engine(4);
        let mut state = state_with_body(&[(16, 12)], Direction::Right, (17, 12));

        let result = engine.step(&mut state);

        assert!(result.ate_apple);
        assert_eq!(state.snake.length, 2);
        assert!(!state.snake.occupies(state.apple.position));

        // growth shows up on the next move: the tail stays put
        let result = engine.step(&mut state);
        assert_eq!(result.vacated, None);
        assert_eq!(state.snake.positions.len(), 2);
    }

    #[test]
    fn test_self_collision_resets_same_tick() {
        let mut engine = engine(5);
        // head at (5,5) going down into (5,6), the fourth segment
        let mut state = state_with_body(
            &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)],
            Direction::Down,
            (20, 20),
        );

        let result = engine.step(&mut state);

        assert_eq!(result.reset, Some(ResetCause::SelfCollision));
        assert_eq!(state.snake.length, 1);
        assert_eq!(state.snake.positions, vec![Position::new(16, 12)]);
        assert_eq!(state.resets, 1);
    }

    #[test]
    fn test_moving_into_tail_cell_still_collides() {
        let mut engine = engine(6);
        // tail (5,6) would be vacated this tick but the check runs pre-move
        let mut state = state_with_body(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Down, (20, 20));

        let result = engine.step(&mut state);

        assert_eq!(result.reset, Some(ResetCause::SelfCollision));
    }

    #[test]
    fn test_board_full_starts_new_round() {
        let config = GameConfig {
            grid_width: 3,
            grid_height: 1,
            ..Default::default()
        };
        let mut engine = GameEngine::with_rng(config, StdRng::seed_from_u64(7));
        let snake = Snake {
            positions: vec![Position::new(1, 0), Position::new(0, 0)],
            direction: Direction::Right,
            next_direction: None,
            // growth from the previous apple still pending
            length: 3,
        };
        let mut state = GameState::new(
            snake,
            Apple {
                position: Position::new(2, 0),
            },
            Grid::new(3, 1),
        );

        let result = engine.step(&mut state);

        assert!(result.ate_apple);
        assert_eq!(result.reset, Some(ResetCause::BoardFull));
        assert_eq!(state.snake.positions, vec![Position::new(1, 0)]);
        assert!(!state.snake.occupies(state.apple.position));
    }

    #[test]
    fn test_restart() {
        let mut engine = engine(8);
        let mut state = state_with_body(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (16, 12));

        engine.restart(&mut state);

        assert_eq!(state.snake.positions, vec![Position::new(16, 12)]);
        assert_eq!(state.resets, 1);
        assert!(!state.snake.occupies(state.apple.position));
    }

    #[test]
    fn test_invariants_hold_over_random_play() {
        let mut engine = engine(9);
        let mut state = engine.new_game().unwrap();
        let mut turns = StdRng::seed_from_u64(10);

        for _ in 0..2000 {
            state.snake.set_pending_direction(Direction::random(&mut turns));
            let result = engine.step(&mut state);

            if result.reset.is_some() {
                assert_eq!(state.snake.length, 1);
                assert_eq!(state.snake.positions, vec![state.grid.center()]);
            } else if result.ate_apple {
                assert_eq!(state.snake.positions.len() + 1, state.snake.length);
            } else {
                assert_eq!(state.snake.positions.len(), state.snake.length);
            }
            assert!(state.snake.positions.iter().all(|p| state.grid.contains(*p)));
            assert!(!state.snake.occupies(state.apple.position));
        }
    }
}

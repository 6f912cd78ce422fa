use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{Instant, Interval, interval, interval_at};
use tracing::{debug, info};

use crate::game::{GameConfig, GameEngine, GameState, TickRate};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{CellBuffer, Renderer, draw_all, draw_step};

/// Keyboard-controlled game in the terminal
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    board: CellBuffer,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_rate: TickRate,
    should_quit: bool,
    /// Key presses waiting for the next tick
    pending_keys: Vec<KeyEvent>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let tick_rate = config.initial_tick_rate;
        let mut engine = GameEngine::new(config);
        let state = engine.new_game().context("Failed to set up the board")?;

        let mut board = CellBuffer::new(state.grid);
        draw_all(&mut board, &state);

        Ok(Self {
            engine,
            state,
            board,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_rate,
            should_quit: false,
            pending_keys: Vec::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(tps = self.tick_rate.tps(), "game started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            ticks = self.state.ticks,
            resets = self.state.resets,
            best_length = self.metrics.best_length,
            "game ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_rate.tick_interval());

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Key presses are only collected here; the tick handles them
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.queue_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => break,
                    }
                }

                _ = tick_timer.tick() => {
                    let rate_before = self.tick_rate;
                    self.tick();

                    if self.should_quit {
                        break;
                    }
                    self.retime(&mut tick_timer, rate_before);

                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.pending_keys.push(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
                }
            }
        }

        Ok(())
    }

    fn queue_event(&mut self, event: Event) {
        // Only process key press events, not release
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.pending_keys.push(key);
            }
        }
    }

    /// One game tick: dispatch queued keys, step the engine, update the board
    fn tick(&mut self) {
        for key in std::mem::take(&mut self.pending_keys) {
            let action = self
                .input_handler
                .handle_key_event(key, self.state.snake.direction);

            match action {
                KeyAction::Turn(direction) => self.state.snake.set_pending_direction(direction),
                KeyAction::Faster => self.change_speed(self.tick_rate.faster()),
                KeyAction::Slower => self.change_speed(self.tick_rate.slower()),
                KeyAction::Restart => self.restart(),
                KeyAction::Quit => {
                    info!("quit requested");
                    self.should_quit = true;
                    return;
                }
                KeyAction::None => {}
            }
        }

        let length_before = self.state.snake.length;
        let step = self.engine.step(&mut self.state);

        if step.reset.is_some() {
            self.metrics.on_round_over(length_before.max(self.state.snake.length));
        } else {
            self.metrics.observe_length(self.state.snake.length);
        }

        draw_step(&mut self.board, &self.state, &step);
    }

    fn change_speed(&mut self, new_rate: TickRate) {
        if new_rate != self.tick_rate {
            debug!(tps = new_rate.tps(), "speed changed");
        }
        self.tick_rate = new_rate;
    }

    /// Swap in a timer at the current rate if the last tick changed it
    fn retime(&self, tick_timer: &mut Interval, rate_before: TickRate) {
        if self.tick_rate != rate_before {
            *tick_timer = pace_timer(self.tick_rate);
        }
    }

    fn restart(&mut self) {
        let length = self.state.snake.length;
        self.engine.restart(&mut self.state);
        self.metrics.on_round_over(length);
        draw_all(&mut self.board, &self.state);
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        terminal
            .draw(|frame| {
                self.renderer.render(
                    frame,
                    &self.board,
                    &self.state,
                    &self.metrics,
                    self.tick_rate,
                );
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Timer at `rate` whose first tick is one full period away
fn pace_timer(rate: TickRate) -> Interval {
    let period = rate.tick_interval();
    interval_at(Instant::now() + period, period)
}

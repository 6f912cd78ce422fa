use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position, TickRate};
use crate::metrics::GameMetrics;

use super::canvas::{BACKGROUND_COLOR, BORDER_COLOR, CellBuffer, Paint};

/// Terminal columns per grid cell, so cells come out roughly square
const CELL_COLUMNS: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        board: &CellBuffer,
        state: &GameState,
        metrics: &GameMetrics,
        tick_rate: TickRate,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics, tick_rate);
        frame.render_widget(stats, chunks[0]);

        // Center the board horizontally
        let grid = board.grid();
        let board_width = grid.width as u16 * CELL_COLUMNS + 2;
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(board_width),
                Constraint::Min(0),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_board(board), game_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board(&self, board: &CellBuffer) -> Paragraph<'_> {
        let grid = board.grid();
        let mut lines = Vec::with_capacity(grid.height);

        for y in 0..grid.height {
            let spans: Vec<Span> = (0..grid.width)
                .map(|x| cell_span(board.get(Position::new(x as i32, y as i32))))
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(
        &self,
        state: &GameState,
        metrics: &GameMetrics,
        tick_rate: TickRate,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                state.snake.length.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(state.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{}/s", tick_rate.tps()), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("+/-", Style::default().fg(Color::Cyan)),
            Span::raw(" speed | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_span(paint: Paint) -> Span<'static> {
    match paint {
        Paint::Empty => Span::styled("  ", Style::default().bg(BACKGROUND_COLOR)),
        // the border becomes a pair of brackets in the border color
        Paint::Filled {
            color,
            outlined: true,
        } => Span::styled("[]", Style::default().fg(BORDER_COLOR).bg(color)),
        Paint::Filled {
            color,
            outlined: false,
        } => Span::styled("  ", Style::default().bg(color)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};
    use crate::render::sprites::draw_all;
    use ratatui::{Terminal, backend::TestBackend};
    use rand::{SeedableRng, rngs::StdRng};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_frame() {
        let mut engine = GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(1));
        let state = engine.new_game().unwrap();
        let mut board = CellBuffer::new(state.grid);
        draw_all(&mut board, &state);
        let metrics = GameMetrics::new();

        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &board, &state, &metrics, TickRate::default())
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Snake"));
        assert!(text.contains("Length: 1"));
        assert!(text.contains("20/s"));
        // snake and apple, each drawn as one bracketed cell
        assert_eq!(text.matches("[]").count(), 2);
    }

    #[test]
    fn test_cell_span_styles() {
        assert_eq!(cell_span(Paint::Empty).content, "  ");

        let outlined = cell_span(Paint::Filled {
            color: Color::Red,
            outlined: true,
        });
        assert_eq!(outlined.content, "[]");
        assert_eq!(outlined.style.bg, Some(Color::Red));
        assert_eq!(outlined.style.fg, Some(BORDER_COLOR));
    }
}

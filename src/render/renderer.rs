use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{self, Position, SessionPhase, Snapshot};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with score and speed
        let stats = self.render_stats(snapshot);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.phase {
            SessionPhase::GameOver => {
                frame.render_widget(self.render_game_over(snapshot), game_area);
            }
            SessionPhase::Running => {
                frame.render_widget(self.render_grid(snapshot), game_area);
            }
            SessionPhase::Idle => {
                frame.render_widget(self.render_grid(snapshot), game_area);
                self.render_banner(frame, game_area, idle_banner(), Color::Green);
            }
            SessionPhase::Paused => {
                frame.render_widget(self.render_grid(snapshot), game_area);
                self.render_banner(frame, game_area, paused_banner(), Color::Yellow);
            }
        }

        // Render footer with controls
        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let head = snapshot.snake.first().copied();
        let tail = snapshot.snake.last().copied();
        let mut lines = Vec::with_capacity(snapshot.grid.height);

        for y in 0..snapshot.grid.height {
            let mut spans = Vec::with_capacity(snapshot.grid.width);

            for x in 0..snapshot.grid.width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if Some(pos) == head {
                    // Snake head - glyph follows the heading
                    Span::styled(
                        head_glyph(snapshot.heading.direction()),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if Some(pos) == tail && snapshot.snake.len() > 1 {
                    Span::styled("▫ ", Style::default().fg(Color::Green))
                } else if snapshot.snake.contains(&pos) {
                    // Snake body
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == snapshot.food {
                    // Food
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let speed_style = if snapshot.speed_locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(snapshot.speed.as_str(), speed_style),
            Span::styled(
                if snapshot.speed_locked { " (locked)" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, text: Vec<Line<'static>>, color: Color) {
        let height = text.len() as u16 + 2;
        let popup = centered(area, area.width.min(44), height.min(area.height));

        let banner = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        frame.render_widget(Clear, popup);
        frame.render_widget(banner, popup);
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("1-4", Style::default().fg(Color::Cyan)),
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

fn head_glyph(heading: Option<game::Direction>) -> &'static str {
    match heading {
        Some(game::Direction::Up) => "▲ ",
        Some(game::Direction::Down) => "▼ ",
        Some(game::Direction::Left) => "◀ ",
        // Standing still faces right
        Some(game::Direction::Right) | None => "▶ ",
    }
}

fn idle_banner() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Press Enter or an arrow key",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "(or click the board) to start",
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn paused_banner() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Space to resume, 1-4 to change speed",
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// Rect of the given size centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, SpeedPreset, Velocity};
    use ratatui::{Terminal, backend::TestBackend};

    fn snapshot(snake: &[Position], phase: SessionPhase) -> Snapshot<'_> {
        Snapshot {
            grid: Grid::new(6, 4),
            snake,
            food: Position::new(0, 0),
            phase,
            score: 3,
            high_score: 7,
            speed: SpeedPreset::Fast,
            speed_locked: phase == SessionPhase::Running,
            heading: Velocity::from(game::Direction::Left),
        }
    }

    fn draw(snapshot: &Snapshot<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, snapshot))
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_running_frame() {
        let snake = [Position::new(2, 1), Position::new(3, 1)];
        let screen = draw(&snapshot(&snake, SessionPhase::Running));

        assert!(screen.contains("Score: 3"));
        assert!(screen.contains("Best: 7"));
        assert!(screen.contains("(locked)"));
        assert!(screen.contains('◀'));
        assert!(screen.contains('O'));
    }

    #[test]
    fn test_overlays() {
        let snake = [Position::new(2, 1)];

        assert!(draw(&snapshot(&snake, SessionPhase::Idle)).contains("to start"));
        assert!(draw(&snapshot(&snake, SessionPhase::Paused)).contains("PAUSED"));
        assert!(draw(&snapshot(&snake, SessionPhase::GameOver)).contains("GAME OVER"));
    }

    #[test]
    fn test_out_of_bounds_head_is_skipped() {
        let snake = [Position::new(-1, 1), Position::new(0, 1)];
        let screen = draw(&snapshot(&snake, SessionPhase::Running));

        assert!(!screen.contains('◀'));
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 30, 4).x, 0);
    }
}

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::game::{GameSession, Input, SessionPhase, TickTimer};
use crate::input::{InputHandler, UiAction};
use crate::render::Renderer;

pub struct HumanMode {
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    needs_redraw: bool,
}

impl HumanMode {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticks = TickDriver::new();

        loop {
            ticks.sync(self.session.timer());

            if self.needs_redraw {
                let snapshot = self.session.snapshot();
                terminal
                    .draw(|frame| self.renderer.render(frame, &snapshot))
                    .context("Failed to draw frame")?;
                self.needs_redraw = false;
            }

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = ticks.tick() => {
                    if self.session.tick() {
                        self.needs_redraw = true;
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => self.input_handler.handle_mouse_event(mouse),
            Event::Resize(_, _) => {
                self.needs_redraw = true;
                return;
            }
            _ => return,
        };

        match action {
            UiAction::Game(input) => self.apply(input),
            // Touching the board starts a game that has never run
            UiAction::TouchStart => {
                if self.session.phase() == SessionPhase::Idle {
                    self.apply(Input::Start);
                }
            }
            UiAction::Quit => {
                self.should_quit = true;
            }
            UiAction::None => {}
        }
    }

    fn apply(&mut self, input: Input) {
        if self.session.handle(input) {
            self.needs_redraw = true;
        } else {
            debug!(?input, phase = ?self.session.phase(), "input ignored");
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Tokio side of the session's [`TickTimer`].
///
/// Replacing the interval drops whatever tick was pending, and the first tick
/// of a new interval fires one full period after arming.
struct TickDriver {
    interval: Option<Interval>,
    generation: u64,
}

impl TickDriver {
    fn new() -> Self {
        Self {
            interval: None,
            generation: 0,
        }
    }

    fn sync(&mut self, timer: &TickTimer) {
        if timer.generation() == self.generation {
            return;
        }

        self.generation = timer.generation();
        self.interval = timer.period().map(|period| {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
    }

    /// Resolves on the next tick; never resolves while disarmed
    async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}

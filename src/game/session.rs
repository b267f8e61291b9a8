//! Session state machine.
//!
//! Owns the board, the score tracker, the tick cadence and the engine, and is
//! the only place phases change:
//!
//! - Idle → Running on start, restart, or the first direction input
//! - Running ⇄ Paused on pause / resume / toggle
//! - Running → GameOver when a tick hits a wall or the body
//! - any phase → Running on restart (fresh board, score back to zero)
//!
//! Requests that do not fit the current phase are ignored.

use rand::{rngs::StdRng, Rng};
use tracing::info;

use super::{
    action::{Input, Velocity},
    arbiter::arbitrate,
    config::{GameConfig, SpeedPreset},
    engine::{GameEngine, StepResult},
    state::{GameState, Grid, Position, SessionPhase},
    timer::TickTimer,
};
use crate::score::ScoreTracker;

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub snake: &'a [Position],
    pub food: Position,
    pub phase: SessionPhase,
    pub score: u32,
    pub high_score: u32,
    pub speed: SpeedPreset,
    pub speed_locked: bool,
    /// Heading the next tick will use
    pub heading: Velocity,
}

pub struct GameSession<R = StdRng> {
    engine: GameEngine<R>,
    state: GameState,
    scores: ScoreTracker,
    speed: SpeedPreset,
    timer: TickTimer,
}

impl<R: Rng> GameSession<R> {
    /// Build an idle session showing a fresh board
    pub fn new(config: &GameConfig, mut engine: GameEngine<R>, scores: ScoreTracker) -> Self {
        let state = engine.reset();

        Self {
            engine,
            state,
            scores,
            speed: config.speed,
            timer: TickTimer::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    pub fn speed(&self) -> SpeedPreset {
        self.speed
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Speed selection is read-only while the snake is moving
    pub fn speed_locked(&self) -> bool {
        self.state.phase == SessionPhase::Running
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.state.grid,
            snake: &self.state.snake.body,
            food: self.state.food,
            phase: self.state.phase,
            score: self.scores.score(),
            high_score: self.scores.high_score(),
            speed: self.speed,
            speed_locked: self.speed_locked(),
            heading: self.state.velocity,
        }
    }

    /// Apply one player intent. Returns true if the view needs redrawing.
    pub fn handle(&mut self, input: Input) -> bool {
        let phase = self.state.phase;
        match input {
            Input::Direction(requested) => match phase {
                // The input that starts a run is not applied as a heading
                SessionPhase::Idle => self.begin_run(),
                SessionPhase::Running => {
                    let pending =
                        arbitrate(requested, self.state.last_velocity, self.state.velocity);
                    let changed = pending != self.state.velocity;
                    self.state.velocity = pending;
                    changed
                }
                SessionPhase::Paused | SessionPhase::GameOver => false,
            },
            Input::Pause => self.pause(),
            Input::Resume => self.resume(),
            Input::TogglePause => match phase {
                SessionPhase::Running => self.pause(),
                SessionPhase::Paused => self.resume(),
                _ => false,
            },
            Input::Start | Input::Restart => self.begin_run(),
            Input::SetSpeed(speed) => {
                if self.speed_locked() {
                    false
                } else {
                    self.set_speed(speed)
                }
            }
        }
    }

    /// Change the tick cadence. While running the timer is re-armed at once.
    pub fn set_speed(&mut self, speed: SpeedPreset) -> bool {
        if speed == self.speed {
            return false;
        }

        self.speed = speed;
        info!(speed = speed.as_str(), "speed changed");
        if self.state.phase == SessionPhase::Running {
            self.timer.arm(speed.tick_interval());
        }
        true
    }

    /// Advance one tick. Returns true if anything was simulated.
    pub fn tick(&mut self) -> bool {
        if self.state.phase != SessionPhase::Running {
            return false;
        }

        let StepResult { terminated, info } = self.engine.step(&mut self.state, &mut self.scores);
        if terminated {
            self.timer.cancel();
            info!(
                score = self.scores.score(),
                high_score = self.scores.high_score(),
                collision = ?info.collision_type,
                "game over"
            );
        }
        true
    }

    fn begin_run(&mut self) -> bool {
        self.state = self.engine.reset();
        self.state.phase = SessionPhase::Running;
        self.scores.reset();
        self.timer.arm(self.speed.tick_interval());
        info!(speed = self.speed.as_str(), "run started");
        true
    }

    fn pause(&mut self) -> bool {
        if self.state.phase != SessionPhase::Running {
            return false;
        }
        self.state.phase = SessionPhase::Paused;
        self.timer.cancel();
        info!("paused");
        true
    }

    fn resume(&mut self) -> bool {
        if self.state.phase != SessionPhase::Paused {
            return false;
        }
        self.state.phase = SessionPhase::Running;
        self.timer.arm(self.speed.tick_interval());
        info!("resumed");
        true
    }
}

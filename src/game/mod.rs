//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The interactive mode drives it through [`GameSession`].

pub mod action;
pub mod arbiter;
pub mod config;
pub mod engine;
pub mod food;
pub mod session;
pub mod state;
pub mod timer;

// Re-export commonly used types
pub use action::{Direction, Input, Velocity};
pub use arbiter::arbitrate;
pub use config::{GameConfig, SpeedPreset};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::place_food;
pub use session::{GameSession, Snapshot};
pub use state::{CollisionType, GameState, Grid, Position, SessionPhase, Snake};
pub use timer::TickTimer;

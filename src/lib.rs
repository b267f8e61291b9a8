//! Grid Snake - a terminal Snake game with a persisted high score
//!
//! This library provides:
//! - Core game logic and the session state machine (game module)
//! - Score keeping and key-value persistence (score module)
//! - Keyboard and mouse-swipe input mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;

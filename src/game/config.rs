use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Named tick cadence presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedPreset {
    /// 150ms per tick
    Slow,
    /// 100ms per tick
    #[default]
    Medium,
    /// 70ms per tick
    Fast,
    /// 50ms per tick
    VeryFast,
}

impl SpeedPreset {
    pub const ALL: [SpeedPreset; 4] = [
        SpeedPreset::Slow,
        SpeedPreset::Medium,
        SpeedPreset::Fast,
        SpeedPreset::VeryFast,
    ];

    /// Get the tick interval for this speed
    pub fn tick_interval(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(150),
            Self::Medium => Duration::from_millis(100),
            Self::Fast => Duration::from_millis(70),
            Self::VeryFast => Duration::from_millis(50),
        }
    }

    /// Get a string representation of the speed
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Medium => "Medium",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Tick cadence selected at startup
    pub speed: SpeedPreset,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            speed: SpeedPreset::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn with_speed(mut self, speed: SpeedPreset) -> Self {
        self.speed = speed;
        self
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

use tracing::{info, warn};

use super::store::KeyValueStore;

/// Key the best-ever score is stored under
pub const HIGH_SCORE_KEY: &str = "snake high score";

/// Current-run score plus the persisted best-ever score
pub struct ScoreTracker {
    score: u32,
    high_score: u32,
    store: Box<dyn KeyValueStore>,
}

impl ScoreTracker {
    /// Create a tracker, reading the best score from `store` once
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let high_score = parse_score(store.get(HIGH_SCORE_KEY));
        info!(high_score, "loaded high score");

        Self {
            score: 0,
            high_score,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Count one food item; persists the best score when it is beaten.
    ///
    /// Returns true if the high score changed.
    pub fn record_food_eaten(&mut self) -> bool {
        self.score += 1;
        if self.score <= self.high_score {
            return false;
        }

        self.high_score = self.score;
        info!(high_score = self.high_score, "new high score");
        if let Err(err) = self
            .store
            .set(HIGH_SCORE_KEY, &self.high_score.to_string())
        {
            warn!(error = %err, "failed to persist high score");
        }
        true
    }

    /// Start a new run. The high score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Debug for ScoreTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreTracker")
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .finish_non_exhaustive()
    }
}

/// Absent or unparsable values count as zero
fn parse_score(raw: Option<String>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

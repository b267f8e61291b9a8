//! Score keeping and the persisted best-ever score

pub mod store;
pub mod tracker;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use tracker::{ScoreTracker, HIGH_SCORE_KEY};

pub mod handler;
pub mod swipe;

pub use handler::{InputHandler, UiAction};
pub use swipe::classify_swipe;

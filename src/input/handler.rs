use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::swipe::classify_swipe;
use crate::game::{Direction, Input, SpeedPreset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Game(Input),
    /// Finger (mouse button) went down on the board
    TouchStart,
    Quit,
    None,
}

/// Maps terminal events to player intents.
///
/// The mouse stands in for a touch screen: pressing the left button starts a
/// swipe, releasing it ends one.
#[derive(Debug, Default)]
pub struct InputHandler {
    touch_start: Option<(u16, u16)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> UiAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return UiAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Direction::Up.into(),
            KeyCode::Down => Direction::Down.into(),
            KeyCode::Left => Direction::Left.into(),
            KeyCode::Right => Direction::Right.into(),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up.into(),
            KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down.into(),
            KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left.into(),
            KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right.into(),

            // Session controls
            KeyCode::Char(' ') => UiAction::Game(Input::TogglePause),
            KeyCode::Char('p') | KeyCode::Char('P') => UiAction::Game(Input::Pause),
            KeyCode::Char('c') | KeyCode::Char('C') => UiAction::Game(Input::Resume),
            KeyCode::Enter => UiAction::Game(Input::Start),
            KeyCode::Char('r') | KeyCode::Char('R') => UiAction::Game(Input::Restart),

            // Speed presets
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as u8 - b'1') as usize;
                UiAction::Game(Input::SetSpeed(SpeedPreset::ALL[index]))
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => UiAction::Quit,

            _ => UiAction::None,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> UiAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.touch_start = Some((mouse.column, mouse.row));
                UiAction::TouchStart
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some((start_col, start_row)) = self.touch_start.take() else {
                    return UiAction::None;
                };
                // A board cell is two columns wide
                let dx = (i32::from(mouse.column) - i32::from(start_col)) / 2;
                let dy = i32::from(mouse.row) - i32::from(start_row);

                classify_swipe(dx, dy)
                    .map(UiAction::from)
                    .unwrap_or(UiAction::None)
            }
            _ => UiAction::None,
        }
    }
}

impl From<Direction> for UiAction {
    fn from(direction: Direction) -> Self {
        UiAction::Game(Input::Direction(direction))
    }
}

//! Input state for the two movement directions
//!
//! Platform code turns mouse, touch and keyboard events into `InputEvent`s;
//! the frame driver copies the resulting `InputState` once per tick.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// A press or release from any input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(Direction),
    Release(Direction),
}

/// Held directions (read-only to the simulation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Apply an event. Repeated presses or releases are harmless.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(dir) => self.set(dir, true),
            InputEvent::Release(dir) => self.set(dir, false),
        }
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Neither direction held
    #[inline]
    pub fn is_idle(&self) -> bool {
        !self.left && !self.right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

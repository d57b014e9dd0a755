use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    /// Leave the title screen. The keyboard reaches it through `Confirm`
    /// (Enter); this variant serves input sources without a context action.
    Start,
    Reset,
    /// Context action: start on the title screen, reset after game over.
    Confirm,
    Quit,
}

impl GameInput {
    /// Maps a terminal key event to a game input.
    ///
    /// Returns `None` for release/repeat events and for unbound keys.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Self::Quit);
        }

        let input = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Self::Direction(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => {
                Self::Direction(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => {
                Self::Direction(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => {
                Self::Direction(Direction::Right)
            }
            KeyCode::Char(' ' | 'p' | 'P') => Self::Pause,
            KeyCode::Enter => Self::Confirm,
            KeyCode::Char('r' | 'R') => Self::Reset,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };

        Some(input)
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Resolves the pending direction after a directional request.
///
/// `current` is the direction the snake last moved in. A request that would
/// reverse it is dropped and `pending` is kept; anything else, including a
/// repeat of `current`, replaces `pending`.
#[must_use]
pub fn propose_direction(current: Direction, pending: Direction, requested: Direction) -> Direction {
    if direction_change_is_valid(current, requested) {
        requested
    } else {
        pending
    }
}

/// Waits up to `timeout` for one terminal event and maps it to a game input.
///
/// Non-key events and unbound keys yield `Ok(None)`.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(GameInput::from_key_event(key)),
        _ => Ok(None),
    }
}

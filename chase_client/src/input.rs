//! Input handling.
//!
//! In a real client this would hook into window key events. Here key events
//! arrive as `KeyEvent`s (from the console or tests) and are folded into the
//! held-key `InputState` the simulation samples once per tick.

use std::fmt;

use anyhow::bail;
use chase_shared::input::InputState;
use tracing::trace;

/// Driving keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
}

impl Key {
    /// Maps a typed character to a driving key. Case-sensitive: only
    /// lowercase `w`, `a`, `s` and `d` drive.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Key::W),
            'a' => Some(Key::A),
            's' => Some(Key::S),
            'd' => Some(Key::D),
            _ => None,
        }
    }

    /// Parses a one-character key name.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match Self::from_char(c) {
                Some(key) => Ok(key),
                None => bail!("not a driving key: {s:?} (expected w, a, s or d)"),
            },
            _ => bail!("expected a single key, got {s:?}"),
        }
    }

    /// The control flag this key holds.
    pub fn flag(self) -> InputState {
        match self {
            Key::W => InputState::FORWARD,
            Key::S => InputState::BACKWARD,
            Key::A => InputState::LEFT,
            Key::D => InputState::RIGHT,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Key::W => 'w',
            Key::A => 'a',
            Key::S => 's',
            Key::D => 'd',
        };
        write!(f, "{c}")
    }
}

/// A key toggling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

impl KeyEvent {
    /// Builds an event from a raw character, ignoring keys that do not drive.
    pub fn from_char(c: char, pressed: bool) -> Option<Self> {
        let key = Key::from_char(c);
        if key.is_none() {
            trace!(key = %c, "Ignoring non-driving key");
        }
        key.map(|k| if pressed { KeyEvent::Down(k) } else { KeyEvent::Up(k) })
    }
}

/// Folds one key event into the held-key state.
pub fn apply(input: &mut InputState, event: KeyEvent) {
    match event {
        KeyEvent::Down(key) => input.insert(key.flag()),
        KeyEvent::Up(key) => input.remove(key.flag()),
    }
}

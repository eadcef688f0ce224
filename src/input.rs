//! Keyboard input: logical keys, held-key tracking and per-player bindings
//!
//! Keys are named after DOM `KeyboardEvent.key` values so the web build can feed
//! events straight in and settings files read naturally (`"w"`, `"ArrowUp"`).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sim::PaddleInput;

/// A logical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// A printable character key, stored lowercase
    Char(char),
}

/// Key name that doesn't map to a supported key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key name {:?}", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowUp" | "Up" => Ok(Key::ArrowUp),
            "ArrowDown" | "Down" => Ok(Key::ArrowDown),
            "ArrowLeft" | "Left" => Ok(Key::ArrowLeft),
            "ArrowRight" | "Right" => Ok(Key::ArrowRight),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => {
                        Ok(Key::Char(c.to_ascii_lowercase()))
                    }
                    _ => Err(UnknownKey(s.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => f.write_str("ArrowUp"),
            Key::ArrowDown => f.write_str("ArrowDown"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = UnknownKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

/// Anything that can report whether a key is currently held
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Set of currently held keys, fed by press/release events
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl InputSource for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Which keys move one player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBindings {
    pub up: Key,
    pub down: Key,
}

impl InputBindings {
    /// W/S
    pub const LEFT_HAND: Self = Self {
        up: Key::Char('w'),
        down: Key::Char('s'),
    };

    /// Arrow keys
    pub const ARROWS: Self = Self {
        up: Key::ArrowUp,
        down: Key::ArrowDown,
    };

    /// Read this player's intent for the current tick
    pub fn sample(&self, input: &(impl InputSource + ?Sized)) -> PaddleInput {
        PaddleInput {
            up: input.is_key_down(self.up),
            down: input.is_key_down(self.down),
        }
    }
}

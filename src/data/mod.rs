//! Data structures for the mansion and the case
//!
//! Defines the room tree, the clue notebook, the suspect index and the
//! compiled-in case dataset.

pub mod dataset;
pub mod index;
pub mod ledger;
pub mod mansion;

pub use dataset::*;
pub use index::*;
pub use ledger::*;
pub use mansion::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest room name kept, in characters
pub const ROOM_NAME_MAX: usize = 49;

/// Longest clue text kept, in characters
pub const CLUE_TEXT_MAX: usize = 99;

/// Which way the player walks out of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Key the player presses for this direction
    pub fn key(&self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Kind of line in the case log, used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    Narration,
    Clue,
    Warning,
    Verdict,
}

impl MessageKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            MessageKind::Narration => "·",
            MessageKind::Clue => "◆",
            MessageKind::Warning => "▲",
            MessageKind::Verdict => "⬤",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Narration => write!(f, "ROOM"),
            MessageKind::Clue => write!(f, "CLUE"),
            MessageKind::Warning => write!(f, "WARN"),
            MessageKind::Verdict => write!(f, "VERDICT"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Copy `text`, keeping at most `max` characters.
///
/// Cuts on a character boundary, never inside a multi-byte sequence.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => {
            tracing::warn!(max, original_len = text.chars().count(), "truncating overlong text");
            text[..cut].to_string()
        }
        None => text.to_string(),
    }
}

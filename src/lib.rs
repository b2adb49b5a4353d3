//! Detective Quest
//!
//! A mystery exploration game: walk the rooms of a mansion, pick up the
//! clues left behind, then accuse the suspect the evidence points at.
//!
//! # Game Mechanics
//!
//! - **Exploration**: the mansion is a binary tree; every room has at most
//!   a left and a right exit, and a room with neither ends the walk
//! - **Clues**: each clue can be picked up once and goes into a notebook
//!   kept in alphabetical order
//! - **Accusation**: every noted clue that points at the accused counts
//!   as one piece of evidence; two or more convict
//!
//! # Architecture
//!
//! - `data` - Mansion tree, clue notebook, suspect index and case dataset
//! - `game` - Session state machine and accusation scoring
//! - `config` - Runtime settings
//! - `tui` - Terminal user interface with ratatui

pub mod config;
pub mod data;
pub mod game;
pub mod tui;

pub use config::GameConfig;
pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Errors the player or the configuration can cause.
///
/// None of these end the process; the game reports them and re-prompts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid option: {0:?}")]
    InvalidCommand(String),

    #[error("There is no path to the {0}")]
    NoPath(Direction),

    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

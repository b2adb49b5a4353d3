//! Core game logic and state management

pub mod resolver;

pub use resolver::*;

use crate::config::GameConfig;
use crate::data::*;
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Case file number, used to tag log lines
    pub id: Id,

    /// The exploration session
    pub resolver: CaseResolver,

    /// Game statistics
    pub stats: GameStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,

    pub started_at: DateTime<Utc>,
}

/// Actions the player can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Raw navigation input, one of `e`, `d` or `s`
    Navigate(String),
    /// Free-text name of the suspect
    Accuse(String),
}

impl GameAction {
    pub fn description(&self) -> String {
        match self {
            GameAction::Navigate(input) => format!("Navigate: {}", input.trim()),
            GameAction::Accuse(name) => format!("Accuse: {}", name.trim()),
        }
    }
}

/// Game statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub rooms_visited: u32,
    pub clues_collected: u32,
    pub duplicate_clues: u32,
    pub rejected_commands: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    pub message: String,
}

impl GameMessage {
    pub fn new(kind: MessageKind, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            message: message.to_string(),
        }
    }

    pub fn narration(message: &str) -> Self {
        Self::new(MessageKind::Narration, message)
    }

    pub fn warning(message: &str) -> Self {
        Self::new(MessageKind::Warning, message)
    }
}

impl Game {
    /// Start a case in the default mansion
    pub fn new(config: &GameConfig) -> Self {
        let mansion = Mansion::build(&MANSION_PLAN);
        let index = ClueIndex::build(SUSPECT_TABLE.iter());
        Self::with_case(mansion, index, config)
    }

    /// Start a case on any map and suspect index
    pub fn with_case(mansion: Mansion, index: ClueIndex, config: &GameConfig) -> Self {
        let resolver = CaseResolver::new(mansion, index, config.accusation_max_len);
        let mut game = Self {
            id: Id::new(),
            resolver,
            stats: GameStats::default(),
            message_log: Vec::new(),
            started_at: Utc::now(),
        };
        tracing::info!(case = %game.id, rooms = game.resolver.mansion().len(), "case opened");

        game.add_message(GameMessage::narration(
            "Welcome to Detective Quest! Explore the mansion to find the clues.",
        ));
        let events = game.resolver.enter();
        game.record(events);
        game
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    /// Execute a player action.
    ///
    /// Bad input is reported in the returned lines, not as an error. Errors
    /// are reserved for actions that make no sense in the current phase.
    pub fn execute_action(&mut self, action: GameAction) -> Result<Vec<String>> {
        tracing::debug!(case = %self.id, action = %action.description(), "executing action");
        let mut results = Vec::new();

        match action {
            GameAction::Navigate(input) => {
                let outcome = choose_direction(&input).and_then(|cmd| self.resolver.navigate(cmd));
                match outcome {
                    Ok(events) => results.extend(self.record(events)),
                    Err(err @ (GameError::InvalidCommand(_) | GameError::NoPath(_))) => {
                        self.stats.rejected_commands += 1;
                        let text = match &err {
                            GameError::InvalidCommand(_) => {
                                "Invalid option. Try again.".to_string()
                            }
                            other => format!("{}.", other),
                        };
                        tracing::debug!(case = %self.id, error = %err, "navigation rejected");
                        self.add_message(GameMessage::warning(&text));
                        results.push(text);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            GameAction::Accuse(name) => {
                let verdict = self.resolver.accuse(&name)?;
                results.extend(self.record(vec![SessionEvent::Judged(verdict)]));
            }
        }

        Ok(results)
    }

    /// Collected clues in alphabetical order, quoted for display
    pub fn notebook(&self) -> Vec<String> {
        self.resolver
            .ledger()
            .in_order()
            .map(|clue| format!("\"{}\"", clue))
            .collect()
    }

    pub fn phase(&self) -> &CasePhase {
        self.resolver.phase()
    }

    pub fn awaiting_accusation(&self) -> bool {
        *self.resolver.phase() == CasePhase::Judging
    }

    pub fn is_over(&self) -> bool {
        self.resolver.is_done()
    }

    /// Check current game status
    pub fn check_status(&self) -> String {
        format!(
            "Room: {} | Visited: {} | Clues: {} | Rejected: {} | Case: {}",
            self.resolver.current_room().name(),
            self.stats.rooms_visited,
            self.resolver.ledger().len(),
            self.stats.rejected_commands,
            self.resolver.phase(),
        )
    }

    /// Release the case structures and log what was freed
    pub fn close(self) {
        let elapsed = Utc::now() - self.started_at;
        let (rooms, clues, entries) = self.resolver.teardown();
        tracing::info!(
            case = %self.id,
            rooms,
            clues,
            index_entries = entries,
            seconds = elapsed.num_seconds(),
            "case closed"
        );
    }

    /// Turn session events into log messages and statistics
    fn record(&mut self, events: Vec<SessionEvent>) -> Vec<String> {
        let mut lines = Vec::new();
        for event in events {
            let message = match event {
                SessionEvent::EnteredRoom { name } => {
                    self.stats.rooms_visited += 1;
                    GameMessage::narration(&format!("You are in: {}", name))
                }
                SessionEvent::ClueFound { text, new } => {
                    if new {
                        self.stats.clues_collected += 1;
                        GameMessage::new(MessageKind::Clue, &format!("Clue found: \"{}\"", text))
                    } else {
                        self.stats.duplicate_clues += 1;
                        GameMessage::new(
                            MessageKind::Clue,
                            &format!("Clue found: \"{}\" (already in your notebook)", text),
                        )
                    }
                }
                SessionEvent::DeadEnd { room } => GameMessage::narration(&format!(
                    "End of the path! There are no more rooms to explore beyond {}.",
                    room
                )),
                SessionEvent::Stopped => {
                    GameMessage::narration("You put away your notebook and end the exploration.")
                }
                SessionEvent::NoClues => GameMessage::new(
                    MessageKind::Verdict,
                    "No clues were collected. The case remains unsolved.",
                ),
                SessionEvent::ReadyForAccusation { clues } => GameMessage::narration(&format!(
                    "Your notebook holds {} clue(s). Time to name the culprit.",
                    clues
                )),
                SessionEvent::Judged(verdict) => {
                    GameMessage::new(MessageKind::Verdict, &verdict_text(&verdict))
                }
            };
            lines.push(message.message.clone());
            self.add_message(message);
        }
        lines
    }
}

/// Closing line for a judged case
pub fn verdict_text(verdict: &Verdict) -> String {
    if verdict.conclusive {
        format!(
            "Conclusive evidence! {} clue(s) point to {}. The suspect is convicted.",
            verdict.score, verdict.accused
        )
    } else {
        format!(
            "Insufficient evidence: only {} clue(s) point to {:?}. The suspect escapes.",
            verdict.score, verdict.accused
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_collects_the_hall_clue() {
        let game = Game::new(&GameConfig::default());
        assert_eq!(game.stats.rooms_visited, 1);
        assert_eq!(game.stats.clues_collected, 1);
        assert_eq!(game.notebook(), vec![format!("\"{}\"", CLUE_MUDDY_BOOT)]);
        assert_eq!(*game.phase(), CasePhase::Exploring);
    }

    #[test]
    fn invalid_input_is_reported_and_counted() {
        let mut game = Game::new(&GameConfig::default());
        let lines = game.execute_action(GameAction::Navigate("x".to_string())).unwrap();
        assert_eq!(lines, vec!["Invalid option. Try again."]);
        assert_eq!(game.stats.rejected_commands, 1);
        assert_eq!(*game.phase(), CasePhase::Exploring);
    }

    #[test]
    fn missing_path_is_reported() {
        let mut game = Game::new(&GameConfig::default());
        game.execute_action(GameAction::Navigate("d".to_string())).unwrap();
        let lines = game.execute_action(GameAction::Navigate("e".to_string())).unwrap();
        assert_eq!(lines, vec!["There is no path to the left."]);
        assert_eq!(game.stats.rejected_commands, 1);
    }

    #[test]
    fn accusing_too_early_is_an_error() {
        let mut game = Game::new(&GameConfig::default());
        assert!(game.execute_action(GameAction::Accuse("Mordomo".to_string())).is_err());
    }

    #[test]
    fn stopping_then_accusing_ends_the_game() {
        let mut game = Game::new(&GameConfig::default());
        game.execute_action(GameAction::Navigate("s".to_string())).unwrap();
        assert!(game.awaiting_accusation());

        let lines = game.execute_action(GameAction::Accuse("Mordomo\n".to_string())).unwrap();
        assert!(lines[0].starts_with("Insufficient evidence"));
        assert!(game.is_over());
        game.close();
    }

    #[test]
    fn verdict_text_reflects_conclusiveness() {
        let convicted = Verdict::new("Mordomo".to_string(), 2);
        assert!(verdict_text(&convicted).contains("convicted"));
        let escaped = Verdict::new("Mordomo".to_string(), 1);
        assert!(verdict_text(&escaped).contains("escapes"));
    }
}

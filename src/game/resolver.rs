//! Case resolution
//!
//! Drives one exploration session over the mansion, feeds the clues it
//! finds into the notebook, and scores the final accusation against the
//! suspect index.

use crate::data::*;
use crate::GameError;
use serde::{Deserialize, Serialize};

/// Clues pointing at the accused needed for a conviction
pub const CONVICTION_THRESHOLD: usize = 2;

/// A validated navigation choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Go(Direction),
    Stop,
}

/// Outcome of judging an accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub accused: String,
    /// Noted clues that point at the accused
    pub score: usize,
    pub conclusive: bool,
}

impl Verdict {
    pub fn new(accused: String, score: usize) -> Self {
        Self {
            accused,
            score,
            conclusive: score >= CONVICTION_THRESHOLD,
        }
    }
}

/// How a finished case ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseOutcome {
    /// The notebook was empty, nobody was accused
    Unsolved,
    Judged(Verdict),
}

/// Where the session stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasePhase {
    Exploring,
    DeadEnd,
    StoppedByPlayer,
    Judging,
    Done(CaseOutcome),
}

impl std::fmt::Display for CasePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CasePhase::Exploring => write!(f, "exploring"),
            CasePhase::DeadEnd => write!(f, "at a dead end"),
            CasePhase::StoppedByPlayer => write!(f, "stopped"),
            CasePhase::Judging => write!(f, "judging"),
            CasePhase::Done(_) => write!(f, "done"),
        }
    }
}

/// Something that happened during the session, for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    EnteredRoom { name: String },
    /// `new` is false when the notebook already held the same text
    ClueFound { text: String, new: bool },
    DeadEnd { room: String },
    Stopped,
    NoClues,
    ReadyForAccusation { clues: usize },
    Judged(Verdict),
}

/// Parse one navigation input: `e` left, `d` right, `s` stop.
///
/// Only the first non-whitespace character counts; the rest of the line is
/// dropped.
pub fn choose_direction(input: &str) -> Result<Command, GameError> {
    let trimmed = input.trim();
    match trimmed.chars().next() {
        Some('e') => Ok(Command::Go(Direction::Left)),
        Some('d') => Ok(Command::Go(Direction::Right)),
        Some('s') => Ok(Command::Stop),
        _ => Err(GameError::InvalidCommand(trimmed.to_string())),
    }
}

/// Clean up a typed accusation: strip surrounding line breaks and cut it to
/// `max_len` characters. Nothing else is checked.
pub fn resolve_accusation(raw: &str, max_len: usize) -> String {
    let name = raw.trim_matches(|c| c == '\n' || c == '\r');
    truncate_chars(name, max_len)
}

/// Number of noted clues whose suspect is exactly `accused`
pub fn count_matches(ledger: &ClueLedger, index: &ClueIndex, accused: &str) -> usize {
    ledger
        .in_order()
        .filter(|clue| index.lookup(clue) == Some(accused))
        .count()
}

/// One exploration session, from the entrance hall to the verdict
#[derive(Debug, Clone)]
pub struct CaseResolver {
    mansion: Mansion,
    ledger: ClueLedger,
    index: ClueIndex,
    cursor: Vec<Direction>,
    phase: CasePhase,
    accusation_max_len: usize,
}

impl CaseResolver {
    pub fn new(mansion: Mansion, index: ClueIndex, accusation_max_len: usize) -> Self {
        Self {
            mansion,
            ledger: ClueLedger::new(),
            index,
            cursor: Vec::new(),
            phase: CasePhase::Exploring,
            accusation_max_len,
        }
    }

    pub fn phase(&self) -> &CasePhase {
        &self.phase
    }

    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    pub fn index(&self) -> &ClueIndex {
        &self.index
    }

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    /// Directions taken from the entrance hall
    pub fn path(&self) -> &[Direction] {
        &self.cursor
    }

    pub fn current_room(&self) -> &Room {
        self.mansion
            .room_at(&self.cursor)
            .unwrap_or_else(|| self.mansion.root())
    }

    /// Exits of the current room with the name of the room behind each
    pub fn available_directions(&self) -> Vec<(Direction, &str)> {
        self.current_room().exits()
    }

    /// Verdict of a judged case
    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.phase {
            CasePhase::Done(CaseOutcome::Judged(verdict)) => Some(verdict),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, CasePhase::Done(_))
    }

    /// Look around the current room: pick up its clue, and end the walk if
    /// it has no exits. Does nothing once exploration is over.
    pub fn enter(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.phase != CasePhase::Exploring {
            return events;
        }
        let Some(room) = self.mansion.room_at_mut(&self.cursor) else {
            return events;
        };

        let name = room.name().to_string();
        let found = room.collect_clue_if_any();
        let dead_end = room.is_dead_end();

        tracing::info!(room = %name, "entered room");
        events.push(SessionEvent::EnteredRoom { name: name.clone() });

        if let Some(text) = found {
            let new = self.ledger.insert(text.clone());
            tracing::info!(room = %name, clue = %text, new, "clue collected");
            events.push(SessionEvent::ClueFound { text, new });
        }

        if dead_end {
            self.set_phase(CasePhase::DeadEnd);
            events.push(SessionEvent::DeadEnd { room: name });
            self.settle(&mut events);
        }
        events
    }

    /// Apply a navigation choice.
    ///
    /// A move toward a missing room is rejected with [`GameError::NoPath`]
    /// and leaves the session unchanged.
    pub fn navigate(&mut self, command: Command) -> Result<Vec<SessionEvent>, GameError> {
        if self.phase != CasePhase::Exploring {
            return Err(GameError::InvalidState(format!("cannot move while {}", self.phase)));
        }
        match command {
            Command::Stop => {
                self.set_phase(CasePhase::StoppedByPlayer);
                let mut events = vec![SessionEvent::Stopped];
                self.settle(&mut events);
                Ok(events)
            }
            Command::Go(direction) => {
                if self.current_room().step(direction).is_none() {
                    tracing::warn!(
                        room = %self.current_room().name(),
                        %direction,
                        "no path that way"
                    );
                    return Err(GameError::NoPath(direction));
                }
                self.cursor.push(direction);
                Ok(self.enter())
            }
        }
    }

    /// Accuse a suspect and close the case.
    ///
    /// Any text is accepted; a name no clue points at simply scores zero.
    pub fn accuse(&mut self, raw: &str) -> Result<Verdict, GameError> {
        if self.phase != CasePhase::Judging {
            return Err(GameError::InvalidState(format!("cannot accuse while {}", self.phase)));
        }
        let accused = resolve_accusation(raw, self.accusation_max_len);
        let score = count_matches(&self.ledger, &self.index, &accused);
        let verdict = Verdict::new(accused, score);
        tracing::info!(
            accused = %verdict.accused,
            score = verdict.score,
            conclusive = verdict.conclusive,
            "accusation judged"
        );
        self.set_phase(CasePhase::Done(CaseOutcome::Judged(verdict.clone())));
        Ok(verdict)
    }

    /// Release the mansion, the notebook and the index.
    ///
    /// Returns how many rooms, notebook entries and index entries went.
    pub fn teardown(self) -> (usize, usize, usize) {
        (
            self.mansion.teardown().len(),
            self.ledger.teardown().len(),
            self.index.teardown(),
        )
    }

    fn settle(&mut self, events: &mut Vec<SessionEvent>) {
        if !matches!(self.phase, CasePhase::DeadEnd | CasePhase::StoppedByPlayer) {
            return;
        }
        self.set_phase(CasePhase::Judging);
        if self.ledger.is_empty() {
            events.push(SessionEvent::NoClues);
            self.set_phase(CasePhase::Done(CaseOutcome::Unsolved));
        } else {
            events.push(SessionEvent::ReadyForAccusation { clues: self.ledger.len() });
        }
    }

    fn set_phase(&mut self, phase: CasePhase) {
        tracing::debug!(from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_for(root: Room, table: &[(&str, &str)]) -> CaseResolver {
        CaseResolver::new(Mansion::from_root(root), ClueIndex::build(table.iter()), 49)
    }

    fn default_resolver() -> CaseResolver {
        CaseResolver::new(
            Mansion::build(&MANSION_PLAN),
            ClueIndex::build(SUSPECT_TABLE.iter()),
            49,
        )
    }

    #[test]
    fn choose_direction_accepts_known_keys() {
        assert_eq!(choose_direction("e"), Ok(Command::Go(Direction::Left)));
        assert_eq!(choose_direction("  d\n"), Ok(Command::Go(Direction::Right)));
        assert_eq!(choose_direction("s"), Ok(Command::Stop));
    }

    #[test]
    fn choose_direction_keeps_only_the_first_key() {
        assert_eq!(choose_direction("ed"), Ok(Command::Go(Direction::Left)));
        assert_eq!(choose_direction(" dx\n"), Ok(Command::Go(Direction::Right)));
        assert_eq!(choose_direction("stop"), Ok(Command::Stop));
    }

    #[test]
    fn choose_direction_rejects_everything_else() {
        for input in ["", "  ", "x", "E", "left", "xe"] {
            assert!(
                matches!(choose_direction(input), Err(GameError::InvalidCommand(_))),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn resolve_accusation_strips_newlines_only() {
        assert_eq!(resolve_accusation("Mordomo\n", 49), "Mordomo");
        assert_eq!(resolve_accusation("\nMordomo\r\n", 49), "Mordomo");
        assert_eq!(resolve_accusation(" Mordomo ", 49), " Mordomo ");
        assert_eq!(resolve_accusation("\n", 49), "");
        assert_eq!(resolve_accusation("Governanta", 4), "Gove");
    }

    #[test]
    fn count_matches_on_empty_ledger_is_zero() {
        let index = ClueIndex::build(SUSPECT_TABLE.iter());
        let ledger = ClueLedger::new();
        for name in SUSPECTS.iter().copied().chain(["", "Ninguem"]) {
            assert_eq!(count_matches(&ledger, &index, name), 0);
        }
    }

    #[test]
    fn count_matches_is_case_sensitive() {
        let index = ClueIndex::build(SUSPECT_TABLE.iter());
        let mut ledger = ClueLedger::new();
        ledger.insert(CLUE_MUDDY_BOOT);
        ledger.insert(CLUE_WARM_TEA);
        ledger.insert(CLUE_CLEAN_KNIVES);
        ledger.insert("Not in the index");
        assert_eq!(count_matches(&ledger, &index, "Mordomo"), 2);
        assert_eq!(count_matches(&ledger, &index, "mordomo"), 0);
        assert_eq!(count_matches(&ledger, &index, "Cozinheiro"), 1);
    }

    #[test]
    fn session_starts_exploring_at_the_hall() {
        let mut resolver = default_resolver();
        let events = resolver.enter();
        assert_eq!(resolver.phase(), &CasePhase::Exploring);
        assert_eq!(resolver.current_room().name(), "Hall de entrada");
        assert_eq!(
            events,
            vec![
                SessionEvent::EnteredRoom { name: "Hall de entrada".to_string() },
                SessionEvent::ClueFound { text: CLUE_MUDDY_BOOT.to_string(), new: true },
            ]
        );
        assert_eq!(
            resolver.available_directions(),
            vec![(Direction::Left, "Sala de Estar"), (Direction::Right, "Biblioteca")]
        );
    }

    #[test]
    fn entering_twice_does_not_collect_twice() {
        let mut resolver = default_resolver();
        resolver.enter();
        let again = resolver.enter();
        assert_eq!(again.len(), 1);
        assert_eq!(resolver.ledger().len(), 1);
    }

    #[test]
    fn moving_toward_missing_room_is_rejected() {
        let mut resolver = default_resolver();
        resolver.enter();
        resolver.navigate(Command::Go(Direction::Right)).unwrap();
        assert_eq!(resolver.current_room().name(), "Biblioteca");

        let err = resolver.navigate(Command::Go(Direction::Left)).unwrap_err();
        assert_eq!(err, GameError::NoPath(Direction::Left));
        assert_eq!(resolver.current_room().name(), "Biblioteca");
        assert_eq!(resolver.phase(), &CasePhase::Exploring);
    }

    #[test]
    fn dead_end_moves_to_judging() {
        let mut resolver = default_resolver();
        resolver.enter();
        resolver.navigate(Command::Go(Direction::Right)).unwrap();
        let events = resolver.navigate(Command::Go(Direction::Right)).unwrap();

        assert_eq!(resolver.phase(), &CasePhase::Judging);
        assert!(events.contains(&SessionEvent::DeadEnd { room: "Escritorio".to_string() }));
        assert!(events.contains(&SessionEvent::ReadyForAccusation { clues: 3 }));

        let verdict = resolver.accuse("Governanta\n").unwrap();
        assert_eq!(verdict.score, 2);
        assert!(verdict.conclusive);
        assert!(resolver.is_done());
        assert_eq!(resolver.verdict(), Some(&verdict));
    }

    #[test]
    fn no_moves_after_the_walk_ends() {
        let mut resolver = default_resolver();
        resolver.enter();
        resolver.navigate(Command::Stop).unwrap();
        assert!(matches!(
            resolver.navigate(Command::Go(Direction::Left)),
            Err(GameError::InvalidState(_))
        ));
    }

    #[test]
    fn accusing_while_exploring_is_rejected() {
        let mut resolver = default_resolver();
        resolver.enter();
        assert!(matches!(resolver.accuse("Mordomo"), Err(GameError::InvalidState(_))));
        assert_eq!(resolver.phase(), &CasePhase::Exploring);
    }

    #[test]
    fn unknown_accusation_scores_zero() {
        let mut resolver = resolver_for(Room::new("Hall", Some("X")), &[("X", "Mordomo")]);
        // a lone room is a dead end, so entering it starts the judging
        resolver.enter();
        let verdict = resolver.accuse("").unwrap();
        assert_eq!(verdict.score, 0);
        assert!(!verdict.conclusive);
    }

    #[test]
    fn empty_notebook_closes_the_case_unsolved() {
        let mut resolver =
            resolver_for(Room::new("Hall", None).with_left(Room::new("Cellar", None)), &[]);
        resolver.enter();
        let events = resolver.navigate(Command::Go(Direction::Left)).unwrap();
        assert!(events.contains(&SessionEvent::NoClues));
        assert_eq!(resolver.phase(), &CasePhase::Done(CaseOutcome::Unsolved));
        assert!(matches!(resolver.accuse("Mordomo"), Err(GameError::InvalidState(_))));
    }

    #[test]
    fn two_matching_clues_convict() {
        assert_eq!(CONVICTION_THRESHOLD, 2);
        assert!(!Verdict::new("Mordomo".to_string(), 1).conclusive);
        assert!(Verdict::new("Mordomo".to_string(), 2).conclusive);
        assert!(Verdict::new("Mordomo".to_string(), 3).conclusive);
    }

    #[test]
    fn teardown_counts_everything() {
        let mut resolver = default_resolver();
        resolver.enter();
        resolver.navigate(Command::Go(Direction::Left)).unwrap();
        assert_eq!(resolver.teardown(), (7, 2, SUSPECT_TABLE.len()));
    }
}

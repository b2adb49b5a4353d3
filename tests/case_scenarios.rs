//! End-to-end case sessions

use detective_quest::game::{
    choose_direction, CaseOutcome, CasePhase, CaseResolver, Command, GameAction, SessionEvent,
};
use detective_quest::{ClueIndex, Direction, Game, GameConfig, GameError, Mansion, Room};
use detective_quest::{
    CLUE_CLEAN_KNIVES, CLUE_MUDDY_BOOT, CLUE_WARM_TEA, MANSION_PLAN, SUSPECT_TABLE,
};

fn default_resolver() -> CaseResolver {
    CaseResolver::new(
        Mansion::build(&MANSION_PLAN),
        ClueIndex::build(SUSPECT_TABLE.iter()),
        49,
    )
}

fn play(resolver: &mut CaseResolver, keys: &str) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    for key in keys.chars() {
        let command = choose_direction(&key.to_string()).unwrap();
        events.extend(resolver.navigate(command).unwrap());
    }
    events
}

#[test]
fn single_clue_is_not_enough_to_convict() {
    let mansion = Mansion::from_root(Room::new("Hall", Some("X")));
    let index = ClueIndex::build([("X", "Mordomo")].iter());
    let mut resolver = CaseResolver::new(mansion, index, 49);

    let events = resolver.enter();
    assert!(events.contains(&SessionEvent::ClueFound { text: "X".to_string(), new: true }));
    assert_eq!(resolver.phase(), &CasePhase::Judging);

    let verdict = resolver.accuse("Mordomo\n").unwrap();
    assert_eq!(verdict.score, 1);
    assert!(!verdict.conclusive);
    assert_eq!(
        resolver.phase(),
        &CasePhase::Done(CaseOutcome::Judged(verdict.clone()))
    );
}

#[test]
fn stopping_right_after_the_first_clue() {
    let mansion =
        Mansion::from_root(Room::new("Hall", Some("X")).with_left(Room::new("Cellar", None)));
    let index = ClueIndex::build([("X", "Mordomo")].iter());
    let mut resolver = CaseResolver::new(mansion, index, 49);

    resolver.enter();
    let events = play(&mut resolver, "s");
    assert_eq!(
        events,
        vec![SessionEvent::Stopped, SessionEvent::ReadyForAccusation { clues: 1 }]
    );

    let verdict = resolver.accuse("Mordomo").unwrap();
    assert_eq!(verdict.score, 1);
    assert!(!verdict.conclusive);
}

#[test]
fn hall_living_room_kitchen_convicts_the_butler() {
    let mut resolver = default_resolver();
    resolver.enter();
    let events = play(&mut resolver, "ee");

    assert!(events.contains(&SessionEvent::DeadEnd { room: "Cozinha".to_string() }));
    assert_eq!(resolver.phase(), &CasePhase::Judging);

    let listed: Vec<&str> = resolver.ledger().in_order().collect();
    let mut expected = vec![CLUE_MUDDY_BOOT, CLUE_WARM_TEA, CLUE_CLEAN_KNIVES];
    expected.sort();
    assert_eq!(listed, expected);

    let verdict = resolver.accuse("Mordomo").unwrap();
    assert_eq!(verdict.score, 2);
    assert!(verdict.conclusive);
}

#[test]
fn same_walk_accusing_the_cook_lets_them_escape() {
    let mut resolver = default_resolver();
    resolver.enter();
    play(&mut resolver, "ee");

    let verdict = resolver.accuse("Cozinheiro").unwrap();
    assert_eq!(verdict.score, 1);
    assert!(!verdict.conclusive);
}

#[test]
fn dead_end_without_clues_skips_the_accusation() {
    let mansion = Mansion::from_root(
        Room::new("Hall", None)
            .with_right(Room::new("Corridor", None).with_left(Room::new("Attic", None))),
    );
    let config = GameConfig::default();
    let mut game = Game::with_case(mansion, ClueIndex::build(SUSPECT_TABLE.iter()), &config);

    game.execute_action(GameAction::Navigate("d".to_string())).unwrap();
    let lines = game.execute_action(GameAction::Navigate("e".to_string())).unwrap();

    assert!(lines.iter().any(|l| l.contains("No clues were collected")));
    assert_eq!(*game.phase(), CasePhase::Done(CaseOutcome::Unsolved));
    assert!(game.notebook().is_empty());
    assert!(!game.awaiting_accusation());
    assert!(game.execute_action(GameAction::Accuse("Mordomo".to_string())).is_err());
}

#[test]
fn bad_keys_never_change_the_room() {
    let mut resolver = default_resolver();
    resolver.enter();
    play(&mut resolver, "d");

    for input in ["x", "q", "  ", "xd"] {
        assert!(matches!(choose_direction(input), Err(GameError::InvalidCommand(_))));
    }
    assert_eq!(
        resolver.navigate(Command::Go(Direction::Left)),
        Err(GameError::NoPath(Direction::Left))
    );
    assert_eq!(resolver.current_room().name(), "Biblioteca");
    assert_eq!(resolver.phase(), &CasePhase::Exploring);
}

#[test]
fn every_walk_through_the_mansion_ends_in_judging() {
    for keys in ["ee", "ede", "dd", "s", "es", "eds", "ds"] {
        let mut resolver = default_resolver();
        resolver.enter();
        play(&mut resolver, keys);
        assert_eq!(resolver.phase(), &CasePhase::Judging, "walk {:?}", keys);

        let listed: Vec<&str> = resolver.ledger().in_order().collect();
        assert!(listed.windows(2).all(|w| w[0] < w[1]), "walk {:?}", keys);
        assert_eq!(listed.len(), resolver.ledger().len());
    }
}

#[test]
fn full_game_through_the_action_api() {
    let mut game = Game::new(&GameConfig::default());
    game.execute_action(GameAction::Navigate("e".to_string())).unwrap();
    game.execute_action(GameAction::Navigate(" e \n".to_string())).unwrap();
    assert!(game.awaiting_accusation());
    assert_eq!(game.notebook().len(), 3);
    assert!(game.notebook().iter().all(|c| c.starts_with('"') && c.ends_with('"')));

    let lines = game.execute_action(GameAction::Accuse("Mordomo\n".to_string())).unwrap();
    assert!(lines[0].starts_with("Conclusive evidence"));
    assert!(game.is_over());
    assert_eq!(game.stats.rooms_visited, 3);
    assert_eq!(game.stats.clues_collected, 3);
    game.close();
}

#[test]
fn overlong_accusation_is_truncated_before_scoring() {
    let mut config = GameConfig::default();
    config.accusation_max_len = 7;
    let mut game = Game::new(&config);
    game.execute_action(GameAction::Navigate("e".to_string())).unwrap();
    game.execute_action(GameAction::Navigate("e".to_string())).unwrap();

    game.execute_action(GameAction::Accuse("Mordomo the butler".to_string())).unwrap();
    let verdict = game.resolver.verdict().unwrap();
    assert_eq!(verdict.accused, "Mordomo");
    assert_eq!(verdict.score, 2);
}

#[test]
fn conviction_rule_ignores_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "conviction_threshold": 3 }"#).unwrap();
    let config = GameConfig::load(&path).unwrap();

    let mut game = Game::new(&config);
    game.execute_action(GameAction::Navigate("e".to_string())).unwrap();
    game.execute_action(GameAction::Navigate("e".to_string())).unwrap();
    game.execute_action(GameAction::Accuse("Mordomo".to_string())).unwrap();

    let verdict = game.resolver.verdict().unwrap();
    assert_eq!(verdict.score, 2);
    assert!(verdict.conclusive);
}

#[test]
fn extra_characters_after_the_key_are_dropped() {
    let mut game = Game::new(&GameConfig::default());
    game.execute_action(GameAction::Navigate("ed".to_string())).unwrap();
    assert_eq!(game.resolver.current_room().name(), "Sala de Estar");
    assert_eq!(game.stats.rejected_commands, 0);
}

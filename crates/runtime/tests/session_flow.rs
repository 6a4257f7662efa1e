mod common;

use common::{FixedRoom, STAIRS, START, player_position, session, texts};
use game_content::{Catalog, MonasteryLayout, WELCOME_MESSAGES};
use game_core::palette;
use game_core::{Direction, Entity, GameConfig, Position, StatChoice, TargetShape};
use runtime::{Intent, Mode, Session, SessionError};

#[test]
fn new_game_builds_first_floor() {
    let session = Session::new_game(
        42,
        GameConfig::default(),
        &Catalog::builtin(),
        Box::new(MonasteryLayout::default()),
    )
    .unwrap();

    let state = session.state();
    assert_eq!(state.world.current_floor, 1);
    assert!(state.player_alive());
    assert!(state.map.walkable(player_position(&session)));
    assert!(state.map.is_visible(player_position(&session)));
    assert!(WELCOME_MESSAGES.contains(&state.log.last().unwrap().text.as_str()));
    assert_eq!(session.mode(), Mode::Normal);
}

#[test]
fn blocked_move_is_logged_without_spending_a_turn() {
    let mut session = session(FixedRoom::empty());
    // (2, 1) is floor; (2, 0) is the outer wall.
    session.handle(Intent::Move(Direction::North)).unwrap();
    let turn = session.state().turn.turn;

    let report = session.handle(Intent::Move(Direction::North)).unwrap();
    assert!(!report.consumed_turn);
    assert_eq!(texts(&report), vec!["That way is blocked."]);
    assert_eq!(report.new_messages[0].color, palette::IMPOSSIBLE);
    assert_eq!(session.state().turn.turn, turn);
    assert_eq!(player_position(&session), Position::new(2, 1));
}

#[test]
fn wait_spends_a_turn() {
    let mut session = session(FixedRoom::empty());
    let report = session.handle(Intent::Wait).unwrap();
    assert!(report.consumed_turn);
    assert_eq!(session.state().turn.turn, 1);
    assert_eq!(report.hp, 30);
    assert_eq!(report.max_hp, 30);
}

#[test]
fn bumping_an_orc_attacks_it() {
    let mut session = session(FixedRoom::empty().with("Orc", Position::new(3, 3)));

    let report = session.handle(Intent::Move(Direction::SouthEast)).unwrap();
    assert!(report.consumed_turn);
    assert_eq!(player_position(&session), START);
    // Dagger-armed priest: 4 power against 0 defense.
    assert_eq!(texts(&report)[0], "Priest attacks Orc for 4 hit points");
}

#[test]
fn empty_pack_slot_is_an_invalid_entry() {
    let mut session = session(FixedRoom::empty());
    let report = session.handle(Intent::Use(9)).unwrap();
    assert!(!report.consumed_turn);
    assert_eq!(texts(&report), vec!["Invalid entry."]);
    assert_eq!(report.new_messages[0].color, palette::INVALID);
}

#[test]
fn targeting_can_be_cancelled_without_side_effects() {
    let mut session = session(FixedRoom::empty().with("Scroll - Reckoning", START));
    session.handle(Intent::Pickup).unwrap();

    let report = session.handle(Intent::Use(2)).unwrap();
    assert!(!report.consumed_turn);
    assert_eq!(texts(&report), vec!["Select a target location"]);
    assert!(matches!(
        report.mode,
        Mode::AwaitingTile {
            cursor: START,
            shape: TargetShape::Radius(_),
            ..
        }
    ));

    // Normal-mode intents are ignored while a tile is pending.
    let turn = session.state().turn.turn;
    session.handle(Intent::Wait).unwrap();
    assert_eq!(session.state().turn.turn, turn);

    let report = session.handle(Intent::Cancel).unwrap();
    assert_eq!(report.mode, Mode::Normal);
    assert!(report.new_messages.is_empty());
    let pack = session
        .state()
        .player()
        .and_then(Entity::as_actor)
        .and_then(|actor| actor.inventory.as_ref())
        .unwrap();
    assert_eq!(pack.len(), 3);
}

#[test]
fn confirmed_area_blast_kills_the_orc_and_burns_the_priest() {
    let mut session = session(
        FixedRoom::empty()
            .with("Scroll - Reckoning", START)
            .with("Orc", Position::new(4, 2)),
    );
    // The orc closes in while the scroll is picked up.
    session.handle(Intent::Pickup).unwrap();
    session.handle(Intent::Use(2)).unwrap();
    session.handle(Intent::MoveCursor(Direction::East)).unwrap();
    let report = session.handle(Intent::MoveCursor(Direction::East)).unwrap();
    assert_eq!(report.mode.cursor(), Some(Position::new(4, 2)));

    let report = session.handle(Intent::ConfirmTile).unwrap();
    assert!(report.consumed_turn);
    assert_eq!(report.mode, Mode::Normal);
    assert!(texts(&report).contains(&"Orc is dead!"));
    assert!(texts(&report).contains(&"You gain 35 experience points."));
    assert_eq!(report.hp, 18);
    assert!(session.state().map.living_actors().all(|actor| actor.id.is_player()));
}

#[test]
fn failed_targeted_use_returns_to_normal_and_keeps_the_scroll() {
    let mut session = session(FixedRoom::empty().with("Scroll - Babel", START));
    session.handle(Intent::Pickup).unwrap();
    session.handle(Intent::Use(2)).unwrap();

    let report = session.handle(Intent::SelectTile(Position::new(3, 3))).unwrap();
    assert!(!report.consumed_turn);
    assert_eq!(report.mode, Mode::Normal);
    assert_eq!(texts(&report), vec!["You must select an enemy to target"]);
}

#[test]
fn descending_builds_the_next_floor() {
    let mut session = session(FixedRoom::empty());

    let report = session.handle(Intent::Descend).unwrap();
    assert!(!report.consumed_turn);
    assert_eq!(texts(&report), vec!["There are no stairs here."]);

    session.handle(Intent::Move(Direction::East)).unwrap();
    assert_eq!(player_position(&session), STAIRS);

    let report = session.handle(Intent::Descend).unwrap();
    assert!(report.consumed_turn);
    assert_eq!(report.floor, 2);
    assert_eq!(texts(&report)[0], "You descend the staircase.");
    assert_eq!(player_position(&session), START);
}

#[test]
fn level_up_blocks_play_until_a_stat_is_chosen() {
    let mut state = session(FixedRoom::empty()).into_state();
    state
        .player_mut()
        .and_then(Entity::as_actor_mut)
        .unwrap()
        .level
        .current_xp = 400;

    let mut session = Session::resume(state, GameConfig::default(), Box::new(FixedRoom::empty()));
    assert_eq!(session.mode(), Mode::AwaitingLevelUp);

    let report = session.handle(Intent::Move(Direction::East)).unwrap();
    assert!(!report.consumed_turn);
    assert_eq!(player_position(&session), START);

    let report = session.handle(Intent::LevelUp(StatChoice::Strength)).unwrap();
    assert_eq!(report.mode, Mode::Normal);
    assert_eq!(texts(&report), vec!["You feel stronger!"]);

    let actor = session.state().player().and_then(Entity::as_actor).unwrap();
    assert_eq!(actor.level.current_level, 2);
    assert_eq!(actor.level.current_xp, 50);
    assert_eq!(actor.fighter.base_power, 3);
}

#[test]
fn dead_player_only_accepts_quit() {
    let mut state = session(FixedRoom::empty()).into_state();
    state.player_mut().and_then(Entity::as_actor_mut).unwrap().ai = None;

    let mut session = Session::resume(state, GameConfig::default(), Box::new(FixedRoom::empty()));
    assert_eq!(session.mode(), Mode::GameOver);

    let report = session.handle(Intent::Wait).unwrap();
    assert!(!report.consumed_turn);
    assert_eq!(session.state().turn.turn, 0);

    let err = session.handle(Intent::Quit { save: false }).unwrap_err();
    assert!(matches!(err, SessionError::Quit { save: false }));
}

#[test]
fn look_names_visible_entities() {
    let session = session(FixedRoom::empty().with("Orc", Position::new(4, 4)));
    assert_eq!(session.look(Position::new(4, 4)), "Orc");
    assert_eq!(session.look(Position::new(6, 6)), "");
}

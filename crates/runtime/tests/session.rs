use std::fs;

use game_core::{CardinalDirection, GameConfig, Position, RoomType, Turn};
use runtime::{RuntimeError, Session};

fn seeded(seed: u64) -> Session {
    Session::builder()
        .seed(seed)
        .build()
        .expect("default config should build")
}

fn open_direction(session: &Session, from: Position) -> Option<CardinalDirection> {
    CardinalDirection::ALL
        .into_iter()
        .find(|&dir| session.board().is_traversable(from.offset(dir)))
}

/// Generation and classification scenario on the default 21x21 board.
///
/// 1. Build a seeded session with 50 requested rooms
/// 2. Check the structural guarantees of the generated board
/// 3. Check that classification left no corridor behind
#[test]
fn seeded_default_session_is_well_formed() {
    let session = seeded(2024);
    let board = session.board();

    assert_eq!((board.width(), board.height()), (21, 21));
    assert_eq!(board.start(), Position::new(10, 10));
    assert_eq!(board.room_type(board.start()), RoomType::Start);
    assert_eq!(board.count(RoomType::Start), 1);
    assert_eq!(board.count(RoomType::Corridor), 0);
    assert!(!board.has_open_square());
    assert!(board.is_connected());

    let report = session.build_report();
    assert_eq!(report.placed, 50);
    assert_eq!(board.traversable_count(), 51);

    // Quotas computed from the rooms that were actually available.
    let available = report.placed as usize;
    assert!(session.assignment().special_total() <= available);
    assert!(session.assignment().count(RoomType::Boss) <= 1);
    assert!(session.assignment().count(RoomType::Shop) <= 2);
}

#[test]
fn same_seed_reproduces_the_board() {
    let a = seeded(31337);
    let b = seeded(31337);
    assert_eq!(a.board(), b.board());
    assert_eq!(a.seed(), 31337);
    assert_eq!(a.assignment(), b.assignment());
}

/// Movement scenario: step off the start cell and verify fog-of-war updates.
#[test]
fn moving_off_start_visits_and_reveals() {
    let mut session = seeded(7);
    let player = session.add_participant("player");
    let start = session.board().start();

    let participant = session.participant(player).unwrap();
    assert_eq!(participant.position(), start);
    assert_eq!(participant.facing(), CardinalDirection::North);
    assert_eq!(participant.energy().current, 100);
    assert!(participant.exploration().visited(start));

    // The first room is always grown next to the start cell.
    let direction = open_direction(&session, start).expect("start has an open neighbour");
    assert!(session.move_participant(player, direction).unwrap());

    let target = start.offset(direction);
    let participant = session.participant(player).unwrap();
    assert_eq!(participant.position(), target);
    assert_eq!(participant.energy().current, 99);

    let exploration = participant.exploration();
    assert!(exploration.visited(target));
    for dr in -1..=1 {
        for dc in -1..=1 {
            let cell = Position::new(target.row + dr, target.col + dc);
            if session.board().is_traversable(cell) {
                assert!(exploration.explored(cell), "{cell} should be explored");
            }
        }
    }
}

#[test]
fn refused_moves_leave_the_participant_untouched() {
    let mut session = seeded(12);
    let player = session.add_participant("player");

    // Walk north until the board refuses, then keep pushing.
    let mut steps = 0;
    while session.move_participant(player, CardinalDirection::North).unwrap() {
        steps += 1;
        assert!(steps <= 21, "cannot walk further than the board height");
    }

    let before = session.participant(player).unwrap().clone();
    for _ in 0..3 {
        assert!(!session.move_participant(player, CardinalDirection::North).unwrap());
    }
    let after = session.participant(player).unwrap();
    assert_eq!(after.position(), before.position());
    assert_eq!(after.energy(), before.energy());
    assert_eq!(after.exploration(), before.exploration());
}

#[test]
fn advance_uses_the_current_facing() {
    let mut session = seeded(5);
    let player = session.add_participant("player");
    let start = session.board().start();
    let direction = open_direction(&session, start).expect("start has an open neighbour");

    while session.participant(player).unwrap().facing() != direction {
        session.turn(player, Turn::Right).unwrap();
    }
    assert_eq!(session.participant(player).unwrap().position(), start);

    assert!(session.advance(player).unwrap());
    assert_eq!(
        session.participant(player).unwrap().position(),
        start.offset(direction)
    );
}

#[test]
fn participants_explore_independently() {
    let mut session = seeded(99);
    let scout = session.add_participant("scout");
    let idle = session.add_participant("idle");
    let start = session.board().start();

    let direction = open_direction(&session, start).expect("start has an open neighbour");
    assert!(session.move_participant(scout, direction).unwrap());
    session.turn(scout, Turn::Left).unwrap();

    let idle_state = session.participant(idle).unwrap();
    assert_eq!(idle_state.position(), start);
    assert_eq!(idle_state.facing(), CardinalDirection::North);
    assert_eq!(idle_state.exploration().visited_count(), 1);
    assert_eq!(idle_state.energy().current, 100);
}

#[test]
fn full_map_override_reveals_everything() {
    let mut session = seeded(3);
    let player = session.add_participant("player");
    let corner = Position::new(0, 0);

    assert!(!session.is_visible(player, corner).unwrap());
    session.set_show_full_map(true);
    assert!(session.is_visible(player, corner).unwrap());
    // The override does not touch the recorded exploration.
    assert!(!session.participant(player).unwrap().exploration().explored(corner));
}

#[test]
fn content_directory_drives_config_and_quotas() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "board_width = 15\nboard_height = 11\ntarget_room_count = 30\nenemy_percent = 100\n",
    )
    .unwrap();
    let mut rooms = String::new();
    for name in ["boss", "shop", "shrine", "treasure", "smithy", "difficult_enemy"] {
        rooms.push_str(&format!("[{name}]\ndivisor = 0\nmax_count = 0\n\n"));
    }
    fs::write(dir.path().join("rooms.toml"), rooms).unwrap();

    let session = Session::builder()
        .from_content(dir.path())
        .seed(17)
        .build()
        .unwrap();
    let board = session.board();

    assert_eq!((board.width(), board.height()), (15, 11));
    assert_eq!(board.start(), Position::new(5, 7));
    assert_eq!(session.assignment().special_total(), 0);
    assert_eq!(board.count(RoomType::Plain), 0);
    assert_eq!(
        board.count(RoomType::Enemy) as u32,
        session.build_report().placed
    );
}

#[test]
fn missing_content_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::builder()
        .from_content(dir.path())
        .seed(1)
        .build()
        .unwrap();
    assert_eq!(session.config(), &GameConfig::default());
}

#[test]
fn zero_sized_board_is_a_config_error() {
    let result = Session::builder()
        .config(GameConfig::default().with_board_size(21, 0))
        .build();
    assert!(matches!(result, Err(RuntimeError::InvalidConfig { .. })));
}

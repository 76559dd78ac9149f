// ═══════════════════════════════════════════════════════════════════════
// Engine test suite — geometry, board visibility, registries, protocol
// ═══════════════════════════════════════════════════════════════════════

use crate::board::{Board, OreSite};
use crate::command::{write_commands, AnnotatedCommand, Command};
use crate::protocol::{read_init, read_turn};
use crate::state::{upsert_robot, GameState};
use crate::types::{Coord, Item, Robot};

// ── Geometry ───────────────────────────────────────────────────────────

#[test]
fn distance_to_self_is_zero() {
    let samples = [Coord::new(0, 0), Coord::new(7, 3), Coord::new(29, 14)];
    for c in samples {
        assert_eq!(c.distance(c), 0);
    }
}

#[test]
fn distance_is_symmetric() {
    let samples = [
        (Coord::new(0, 0), Coord::new(5, 5)),
        (Coord::new(2, 9), Coord::new(17, 1)),
        (Coord::new(29, 14), Coord::new(0, 7)),
    ];
    for (a, b) in samples {
        assert_eq!(a.distance(b), b.distance(a));
    }
}

#[test]
fn distance_satisfies_triangle_inequality() {
    let points = [
        Coord::new(0, 0),
        Coord::new(5, 2),
        Coord::new(12, 9),
        Coord::new(29, 14),
        Coord::new(3, 11),
    ];
    for a in points {
        for b in points {
            for c in points {
                assert!(a.distance(c) <= a.distance(b) + b.distance(c));
            }
        }
    }
}

#[test]
fn sentinel_position_marks_dead_robot() {
    let dead = Robot { id: 3, pos: Coord::NONE, item: Item::None };
    let alive = Robot { id: 4, pos: Coord::new(0, 0), item: Item::None };
    assert!(dead.is_dead());
    assert!(!alive.is_dead());
}

// ── Board ──────────────────────────────────────────────────────────────

#[test]
fn fresh_board_is_fully_unknown() {
    let board = Board::new(30, 15);
    for y in 0..15 {
        for x in 0..30 {
            let cell = board.cell(Coord::new(x, y));
            assert_eq!(cell.ore, None);
            assert!(!cell.hole);
        }
    }
    assert!(board.ore_sites().is_empty());
}

#[test]
fn ore_sites_follow_board_scan_order() {
    let mut board = Board::new(4, 3);
    board.cell_mut(Coord::new(3, 2)).ore = Some(1);
    board.cell_mut(Coord::new(1, 0)).ore = Some(2);
    board.cell_mut(Coord::new(0, 1)).ore = Some(3);
    board.cell_mut(Coord::new(2, 1)).ore = Some(0); // known but empty

    let sites = board.ore_sites();
    assert_eq!(
        sites,
        vec![
            OreSite { pos: Coord::new(1, 0), amount: 2 },
            OreSite { pos: Coord::new(0, 1), amount: 3 },
            OreSite { pos: Coord::new(3, 2), amount: 1 },
        ]
    );
}

// ── Registry ───────────────────────────────────────────────────────────

#[test]
fn upsert_updates_in_place() {
    let mut state = GameState::new(5, 5);
    upsert_robot(&mut state.my_robots, 2, Coord::new(1, 1), Item::None);
    upsert_robot(&mut state.my_robots, 2, Coord::new(2, 1), Item::Ore);

    assert_eq!(state.my_robots.len(), 1);
    let robot = &state.my_robots[&2];
    assert_eq!(robot.pos, Coord::new(2, 1));
    assert_eq!(robot.item, Item::Ore);
}

#[test]
fn registries_iterate_in_id_order() {
    let mut state = GameState::new(5, 5);
    upsert_robot(&mut state.my_robots, 9, Coord::new(0, 0), Item::None);
    upsert_robot(&mut state.my_robots, 1, Coord::new(1, 0), Item::None);
    upsert_robot(&mut state.my_robots, 4, Coord::new(2, 0), Item::None);

    let ids: Vec<_> = state.my_robots.keys().copied().collect();
    assert_eq!(ids, vec![1, 4, 9]);
}

#[test]
fn living_robots_skips_the_dead() {
    let mut state = GameState::new(5, 5);
    upsert_robot(&mut state.my_robots, 0, Coord::NONE, Item::None);
    upsert_robot(&mut state.my_robots, 1, Coord::new(3, 3), Item::None);

    let ids: Vec<_> = state.living_robots().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

// ── Protocol ───────────────────────────────────────────────────────────

const TURN_ONE: &str = "\
10 12
? 0 3 1 ? 0
0 0 ? 1 2 0
4 5 0
0 0 1 1 -1
1 1 2 1 -1
7 2 1 0 -1
8 3 2 1 -1
";

#[test]
fn read_init_parses_board_size() {
    let mut input = "30 15\n".as_bytes();
    assert_eq!(read_init(&mut input), Ok((30, 15)));
}

#[test]
fn read_turn_populates_state() {
    let mut state = GameState::new(3, 2);
    let mut input = TURN_ONE.as_bytes();
    assert_eq!(read_turn(&mut input, &mut state), Ok(true));

    assert_eq!(state.my_score, 10);
    assert_eq!(state.opponent_score, 12);
    assert_eq!(state.radar_cooldown, 5);
    assert_eq!(state.trap_cooldown, 0);

    assert_eq!(state.board.cell(Coord::new(0, 0)).ore, None);
    assert_eq!(state.board.cell(Coord::new(1, 0)).ore, Some(3));
    assert!(state.board.cell(Coord::new(1, 0)).hole);
    assert_eq!(state.board.cell(Coord::new(2, 1)).ore, Some(2));

    assert_eq!(state.my_robots.len(), 1);
    assert_eq!(state.my_robots[&0].pos, Coord::new(1, 1));
    assert_eq!(state.opponent_robots.len(), 1);
    assert_eq!(state.radars.len(), 1);
    assert_eq!(state.radars[0].pos, Coord::new(1, 0));
    assert_eq!(state.traps.len(), 1);
    assert_eq!(state.traps[0].pos, Coord::new(2, 1));
}

#[test]
fn revealed_ore_can_become_unknown_again() {
    let mut state = GameState::new(3, 2);
    let mut input = TURN_ONE.as_bytes();
    read_turn(&mut input, &mut state).unwrap();
    assert_eq!(state.board.cell(Coord::new(1, 0)).ore, Some(3));

    // Next turn the radar is gone and the cell is hidden again.
    let turn_two = "\
10 12
? 0 ? 1 ? 0
0 0 ? 1 ? 0
1 5 4
0 0 2 1 4
";
    let mut input = turn_two.as_bytes();
    read_turn(&mut input, &mut state).unwrap();
    assert_eq!(state.board.cell(Coord::new(1, 0)).ore, None);
    assert!(state.radars.is_empty());

    // Same robot record, new position and cargo.
    assert_eq!(state.my_robots.len(), 1);
    assert_eq!(state.my_robots[&0].pos, Coord::new(2, 1));
    assert_eq!(state.my_robots[&0].item, Item::Ore);
}

#[test]
fn end_of_match_is_a_clean_stop() {
    let mut state = GameState::new(3, 2);
    let mut input = "".as_bytes();
    assert_eq!(read_turn(&mut input, &mut state), Ok(false));
}

#[test]
fn truncated_turn_is_fatal() {
    let mut state = GameState::new(3, 2);
    let mut input = "10 12\n? 0 3 1 ? 0\n".as_bytes();
    assert!(read_turn(&mut input, &mut state).is_err());
}

#[test]
fn malformed_token_is_fatal() {
    let mut state = GameState::new(3, 2);
    let mut input = "ten 12\n".as_bytes();
    assert!(read_turn(&mut input, &mut state).is_err());
}

#[test]
fn unknown_entity_type_is_fatal() {
    let mut state = GameState::new(3, 2);
    let turn = "\
0 0
? 0 ? 0 ? 0
? 0 ? 0 ? 0
1 0 0
5 9 0 0 -1
";
    let mut input = turn.as_bytes();
    assert!(read_turn(&mut input, &mut state).is_err());
}

// ── Commands ───────────────────────────────────────────────────────────

#[test]
fn commands_render_the_wire_format() {
    assert_eq!(Command::Wait.to_string(), "WAIT");
    assert_eq!(Command::Move(Coord::new(3, 4)).to_string(), "MOVE 3 4");
    assert_eq!(Command::Dig(Coord::new(5, 5)).to_string(), "DIG 5 5");
    assert_eq!(Command::Request(Item::Radar).to_string(), "REQUEST RADAR");
    assert_eq!(Command::Request(Item::Trap).to_string(), "REQUEST TRAP");
}

#[test]
fn notes_trail_the_command() {
    let annotated = AnnotatedCommand::with_note(Command::Dig(Coord::new(5, 5)), "arming trap");
    assert_eq!(annotated.to_string(), "DIG 5 5 arming trap");
    let bare: AnnotatedCommand = Command::Wait.into();
    assert_eq!(bare.to_string(), "WAIT");
}

#[test]
fn batches_write_one_line_per_robot() {
    let commands = vec![
        AnnotatedCommand::new(Command::Request(Item::Radar)),
        AnnotatedCommand::new(Command::Wait),
        AnnotatedCommand::with_note(Command::Move(Coord::new(0, 7)), "delivering"),
    ];
    let mut out = Vec::new();
    write_commands(&mut out, &commands).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "REQUEST RADAR\nWAIT\nMOVE 0 7 delivering\n"
    );
}

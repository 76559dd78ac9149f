// ═══════════════════════════════════════════════════════════════════════
// Game state — one per match, mutated in place between turns
// ═══════════════════════════════════════════════════════════════════════

use crate::board::Board;
use crate::types::{Coord, EntityId, Fixture, Item, Robot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything visible this turn. Robot registries persist across turns and
/// are updated in place so ids keep pointing at the same record; radar and
/// trap lists and the scalar turn context are replaced wholesale.
///
/// `BTreeMap` gives the registries a stable id iteration order, which
/// doubles as the command output order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub my_robots: BTreeMap<EntityId, Robot>,
    pub opponent_robots: BTreeMap<EntityId, Robot>,
    pub radars: Vec<Fixture>,
    pub traps: Vec<Fixture>,
    pub my_score: u32,
    pub opponent_score: u32,
    pub radar_cooldown: u32,
    pub trap_cooldown: u32,
}

impl GameState {
    pub fn new(width: i32, height: i32) -> GameState {
        GameState {
            board: Board::new(width, height),
            my_robots: BTreeMap::new(),
            opponent_robots: BTreeMap::new(),
            radars: Vec::new(),
            traps: Vec::new(),
            my_score: 0,
            opponent_score: 0,
            radar_cooldown: 0,
            trap_cooldown: 0,
        }
    }

    /// Own robots that are still on the board.
    pub fn living_robots(&self) -> impl Iterator<Item = &Robot> {
        self.my_robots.values().filter(|r| !r.is_dead())
    }
}

/// Find-or-insert a robot by id, then overwrite its mutable fields. The
/// entry itself is never replaced, so the id keeps denoting the same robot
/// for the whole match.
pub fn upsert_robot(registry: &mut BTreeMap<EntityId, Robot>, id: EntityId, pos: Coord, item: Item) {
    registry
        .entry(id)
        .and_modify(|robot| {
            robot.pos = pos;
            robot.item = item;
        })
        .or_insert(Robot { id, pos, item });
}

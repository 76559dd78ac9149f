// ═══════════════════════════════════════════════════════════════════════
// Core types — coordinates, items, and the entities the referee reports
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable entity identifier assigned by the referee. Ids survive turn
/// boundaries, including for dead robots.
pub type EntityId = i32;

// ── Coordinates ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Sentinel position reported for entities that are no longer on the
    /// board (dead robots).
    pub const NONE: Coord = Coord { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// Manhattan distance. Robots move and dig on a 4-neighbour grid, so
    /// taxicab geometry is the only metric the game needs.
    pub fn distance(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

// ── Items ──────────────────────────────────────────────────────────────

/// What a robot holds in its cargo bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    None,
    Radar,
    Trap,
    Ore,
}

impl Item {
    /// Wire code from the entity lines: -1 NONE, 2 RADAR, 3 TRAP, 4 ORE.
    pub fn from_code(code: i32) -> Result<Item, String> {
        match code {
            -1 => Ok(Item::None),
            2 => Ok(Item::Radar),
            3 => Ok(Item::Trap),
            4 => Ok(Item::Ore),
            _ => Err(format!("unknown item code {}", code)),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::None => f.write_str("NONE"),
            Item::Radar => f.write_str("RADAR"),
            Item::Trap => f.write_str("TRAP"),
            Item::Ore => f.write_str("ORE"),
        }
    }
}

// ── Entity kinds ───────────────────────────────────────────────────────

/// Closed set of entity types the referee can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    MyRobot,
    OpponentRobot,
    Radar,
    Trap,
}

impl EntityKind {
    pub fn from_code(code: i32) -> Result<EntityKind, String> {
        match code {
            0 => Ok(EntityKind::MyRobot),
            1 => Ok(EntityKind::OpponentRobot),
            2 => Ok(EntityKind::Radar),
            3 => Ok(EntityKind::Trap),
            _ => Err(format!("unknown entity type {}", code)),
        }
    }
}

// ── Entities ───────────────────────────────────────────────────────────

/// A robot, ours or the opponent's. Registry entries are updated in place
/// across turns, so a `Robot` value keeps its identity for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub id: EntityId,
    pub pos: Coord,
    pub item: Item,
}

impl Robot {
    pub fn is_dead(&self) -> bool {
        self.pos == Coord::NONE
    }
}

/// A placed radar or trap. Which of the two it is follows from the list it
/// lives in on `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: EntityId,
    pub pos: Coord,
}

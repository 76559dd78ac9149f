// ═══════════════════════════════════════════════════════════════════════
// Radar coverage pattern — static strategy data
//
// A fixed drop order for the standard 30×15 board, laid out so each
// radar's reveal area overlaps the previous ones as little as possible.
// Re-derivable offline for other board sizes; not generalized here.
// ═══════════════════════════════════════════════════════════════════════

use orebot_engine::types::{Coord, Fixture};

pub const RADAR_SPOTS: [Coord; 17] = [
    Coord { x: 5, y: 4 },
    Coord { x: 10, y: 8 },
    Coord { x: 15, y: 4 },
    Coord { x: 20, y: 8 },
    Coord { x: 25, y: 4 },
    Coord { x: 15, y: 12 },
    Coord { x: 6, y: 13 },
    Coord { x: 24, y: 13 },
    Coord { x: 0, y: 9 },
    Coord { x: 29, y: 9 },
    Coord { x: 10, y: 0 },
    Coord { x: 20, y: 0 },
    Coord { x: 29, y: 0 },
    Coord { x: 0, y: 0 },
    Coord { x: 10, y: 14 },
    Coord { x: 18, y: 14 },
    Coord { x: 28, y: 14 },
];

/// First spot in the drop order with no radar sitting at that exact
/// coordinate. `None` once the whole pattern is placed.
pub fn next_radar_spot(radars: &[Fixture]) -> Option<Coord> {
    RADAR_SPOTS
        .iter()
        .copied()
        .find(|spot| radars.iter().all(|radar| radar.pos != *spot))
}

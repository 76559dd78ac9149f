// ═══════════════════════════════════════════════════════════════════════
// Board — the ore grid as far as we can see it
//
// Cells start unknown and are overwritten wholesale every turn by the
// snapshot assembler. A cell revealed on turn N and hidden again on turn
// N+1 (radar destroyed) goes back to unknown: there is no carry-over of
// stale ore values.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::Coord;
use serde::{Deserialize, Serialize};

/// One grid cell. `ore` is `None` until a radar reveals it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub ore: Option<u32>,
    pub hole: bool,
}

/// A cell with known, positive ore — a candidate dig target. Derived from
/// the board on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreSite {
    pub pos: Coord,
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Board {
        Board {
            width,
            height,
            cells: vec![Cell::default(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, pos: Coord) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    pub fn cell(&self, pos: Coord) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn cell_mut(&mut self, pos: Coord) -> &mut Cell {
        let i = self.index(pos);
        &mut self.cells[i]
    }

    /// All cells with known, positive ore, in board scan order (row by
    /// row). Callers that break distance ties rely on this order being
    /// stable.
    pub fn ore_sites(&self) -> Vec<OreSite> {
        let mut sites = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Coord::new(x, y);
                if let Some(amount) = self.cell(pos).ore {
                    if amount > 0 {
                        sites.push(OreSite { pos, amount });
                    }
                }
            }
        }
        sites
    }
}

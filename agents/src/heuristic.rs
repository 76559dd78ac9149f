// ═══════════════════════════════════════════════════════════════════════
// Heuristic Agent — the rule-based action selector
//
// Per-turn procedure:
//   1. Trap-request pre-pass: if nobody carries a trap and a robot sits at
//      the home column, that robot requests one.
//   2. The first living robot is on radar duty: it keeps requesting and
//      planting radars along the coverage pattern.
//   3. A robot carrying a trap buries it in the nearest known ore site.
//   4. Everyone else digs the nearest safe ore site, or hauls its cargo
//      back to the home column.
//
// Robots are decided independently, not globally optimized.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use crate::coverage::next_radar_spot;
use orebot_engine::command::{AnnotatedCommand, Command};
use orebot_engine::state::GameState;
use orebot_engine::types::{Coord, EntityId, Item, Robot};

#[derive(Debug, Default)]
pub struct HeuristicAgent {
    /// Robot designated to carry the trap. Sticky across turns; cleared
    /// once the robot no longer appears in the registry.
    trap_carrier: Option<EntityId>,
}

impl HeuristicAgent {
    pub fn new() -> HeuristicAgent {
        HeuristicAgent::default()
    }

    /// Pick the robot that should request a trap this turn: the first
    /// living robot waiting at the home column, excluding the radar-duty
    /// robot (radar duty wins when both apply). Nothing is picked while
    /// any own robot already carries a trap.
    fn pick_trap_requester(
        &self,
        state: &GameState,
        radar_duty: Option<EntityId>,
    ) -> Option<EntityId> {
        if state.my_robots.values().any(|r| r.item == Item::Trap) {
            return None;
        }
        state
            .living_robots()
            .find(|r| r.pos.x == 0 && Some(r.id) != radar_duty)
            .map(|r| r.id)
    }

    fn radar_duty_action(&self, robot: &Robot, state: &GameState) -> AnnotatedCommand {
        match robot.item {
            Item::Radar => match next_radar_spot(&state.radars) {
                Some(spot) if robot.pos == spot => {
                    AnnotatedCommand::with_note(Command::Dig(spot), "planting radar")
                }
                Some(spot) => AnnotatedCommand::new(Command::Move(spot)),
                // Pattern exhausted: join the diggers.
                None => self.dig_or_haul(robot, state),
            },
            Item::None | Item::Ore => {
                AnnotatedCommand::with_note(Command::Request(Item::Radar), "requesting radar")
            }
            Item::Trap => AnnotatedCommand::new(Command::Wait),
        }
    }

    /// Bury the carried trap in the nearest known ore site — area denial
    /// on a cell somebody will want to dig. Ties break in board scan
    /// order.
    fn place_trap(&self, robot: &Robot, state: &GameState) -> AnnotatedCommand {
        let target = state
            .board
            .ore_sites()
            .into_iter()
            .min_by_key(|site| site.pos.distance(robot.pos));
        match target {
            None => self.dig_or_haul(robot, state),
            Some(site) if site.pos.distance(robot.pos) <= 1 => {
                AnnotatedCommand::with_note(Command::Dig(site.pos), "arming trap")
            }
            Some(site) => AnnotatedCommand::new(Command::Move(site.pos)),
        }
    }

    /// Default digger: deliver carried ore to the home column, otherwise
    /// work the nearest known ore site that is not a known trap cell.
    fn dig_or_haul(&self, robot: &Robot, state: &GameState) -> AnnotatedCommand {
        if robot.item == Item::Ore {
            let home = Coord::new(0, robot.pos.y);
            return AnnotatedCommand::with_note(Command::Move(home), "delivering");
        }
        let target = state
            .board
            .ore_sites()
            .into_iter()
            .filter(|site| state.traps.iter().all(|trap| trap.pos != site.pos))
            .min_by_key(|site| site.pos.distance(robot.pos));
        match target {
            None => AnnotatedCommand::new(Command::Wait),
            Some(site) if site.pos.distance(robot.pos) <= 1 => {
                AnnotatedCommand::new(Command::Dig(site.pos))
            }
            Some(site) => AnnotatedCommand::new(Command::Move(site.pos)),
        }
    }
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str {
        "Heuristic"
    }

    fn act(&mut self, state: &GameState) -> Vec<AnnotatedCommand> {
        // Invalidate the sticky carrier once its robot is gone.
        if let Some(id) = self.trap_carrier {
            if !state.my_robots.contains_key(&id) {
                self.trap_carrier = None;
            }
        }

        // Radar duty falls to the first robot still on the board.
        let radar_duty = state.living_robots().next().map(|r| r.id);

        let requester = self.pick_trap_requester(state, radar_duty);
        if requester.is_some() {
            self.trap_carrier = requester;
        }

        state
            .my_robots
            .values()
            .map(|robot| {
                if robot.is_dead() {
                    AnnotatedCommand::with_note(Command::Wait, "down")
                } else if Some(robot.id) == radar_duty {
                    self.radar_duty_action(robot, state)
                } else if Some(robot.id) == requester {
                    AnnotatedCommand::with_note(Command::Request(Item::Trap), "requesting trap")
                } else if robot.item == Item::Trap {
                    self.place_trap(robot, state)
                } else {
                    self.dig_or_haul(robot, state)
                }
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════

// ═══════════════════════════════════════════════════════════════════════
// Random Agent — wanders, digs, and hauls at random.
// Serves as baseline opponent and as a protocol smoke driver.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use orebot_engine::command::{AnnotatedCommand, Command};
use orebot_engine::state::GameState;
use orebot_engine::types::Coord;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> RandomAgent {
        RandomAgent {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn act(&mut self, state: &GameState) -> Vec<AnnotatedCommand> {
        state
            .my_robots
            .values()
            .map(|robot| {
                if robot.is_dead() {
                    return Command::Wait.into();
                }
                match self.rng.gen_range(0..4) {
                    0 => Command::Wait.into(),
                    1 => {
                        let target = Coord::new(
                            self.rng.gen_range(0..state.board.width()),
                            self.rng.gen_range(0..state.board.height()),
                        );
                        Command::Move(target).into()
                    }
                    2 => Command::Dig(robot.pos).into(),
                    _ => Command::Move(Coord::new(0, robot.pos.y)).into(),
                }
            })
            .collect()
    }
}

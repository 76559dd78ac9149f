// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface that all decision agents implement
//
// Agents only read the turn snapshot; the snapshot assembler owns all
// mutation of board and registries. Whatever state an agent carries across
// turns lives inside the agent itself.
// ═══════════════════════════════════════════════════════════════════════

use orebot_engine::command::AnnotatedCommand;
use orebot_engine::state::GameState;

pub trait Agent: Send + Sync {
    /// Human-readable name for this agent.
    fn name(&self) -> &str;

    /// Decide the whole turn: exactly one command per controlled robot,
    /// in registry (id) order — dead robots included, so the output batch
    /// always matches the registry line for line.
    fn act(&mut self, state: &GameState) -> Vec<AnnotatedCommand>;
}

pub mod agent;
pub mod coverage;
pub mod heuristic;
pub mod random;

pub use agent::Agent;
pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;

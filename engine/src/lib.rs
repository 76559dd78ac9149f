pub mod types;
pub mod board;
pub mod state;
pub mod protocol;
pub mod command;

#[cfg(test)]
mod tests;

pub use types::*;
pub use board::{Board, Cell, OreSite};
pub use state::{upsert_robot, GameState};
pub use command::{write_commands, AnnotatedCommand, Command};

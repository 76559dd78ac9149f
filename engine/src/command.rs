// ═══════════════════════════════════════════════════════════════════════
// Command emitter — one protocol line per controlled robot
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{Coord, Item};
use std::fmt;
use std::io::{self, Write};

/// One robot action. The `Display` form is the exact wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Wait,
    Move(Coord),
    Dig(Coord),
    Request(Item),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Wait => f.write_str("WAIT"),
            Command::Move(pos) => write!(f, "MOVE {}", pos),
            Command::Dig(pos) => write!(f, "DIG {}", pos),
            Command::Request(item) => write!(f, "REQUEST {}", item),
        }
    }
}

/// A command plus an optional trailing note. The note is echoed by the
/// referee UI and has no semantic effect; diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedCommand {
    pub command: Command,
    pub note: Option<String>,
}

impl AnnotatedCommand {
    pub fn new(command: Command) -> AnnotatedCommand {
        AnnotatedCommand { command, note: None }
    }

    pub fn with_note(command: Command, note: impl Into<String>) -> AnnotatedCommand {
        AnnotatedCommand {
            command,
            note: Some(note.into()),
        }
    }
}

impl From<Command> for AnnotatedCommand {
    fn from(command: Command) -> AnnotatedCommand {
        AnnotatedCommand::new(command)
    }
}

impl fmt::Display for AnnotatedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        if let Some(note) = &self.note {
            write!(f, " {}", note)?;
        }
        Ok(())
    }
}

/// Write the whole turn batch, one line per command, and flush. The
/// referee reads a fixed number of lines per turn, so the batch must go
/// out complete or not at all.
pub fn write_commands(out: &mut impl Write, commands: &[AnnotatedCommand]) -> io::Result<()> {
    for command in commands {
        writeln!(out, "{}", command)?;
    }
    out.flush()
}

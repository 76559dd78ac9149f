// ═══════════════════════════════════════════════════════════════════════
// Runner — stdio glue between the referee and an agent
//
// One read of the turn snapshot, one decision pass, one complete command
// batch, per turn. A protocol error is fatal: better to forfeit than to
// hand the referee a half-written batch.
// ═══════════════════════════════════════════════════════════════════════

use clap::Parser;
use orebot_agents::{Agent, HeuristicAgent, RandomAgent};
use orebot_engine::command::write_commands;
use orebot_engine::protocol;
use orebot_engine::state::GameState;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(Parser)]
#[command(name = "orebot", about = "Ore rush bot speaking the referee protocol on stdio")]
struct Cli {
    /// Agent type: "heuristic" or "random"
    #[arg(short, long, default_value = "heuristic")]
    agent: String,
    /// Seed for agents that use randomness
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Dump the parsed game state to stderr as JSON each turn
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut agent: Box<dyn Agent> = match cli.agent.as_str() {
        "random" => Box::new(RandomAgent::new(cli.seed)),
        "heuristic" => Box::new(HeuristicAgent::new()),
        other => {
            eprintln!("unknown agent {:?} (expected \"heuristic\" or \"random\")", other);
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&mut stdin.lock(), &mut stdout.lock(), agent.as_mut(), cli.trace) {
        eprintln!("fatal: {}", e);
        process::exit(1);
    }
}

fn run(
    input: &mut impl BufRead,
    output: &mut impl Write,
    agent: &mut dyn Agent,
    trace: bool,
) -> Result<(), String> {
    let (width, height) = protocol::read_init(input)?;
    let mut state = GameState::new(width, height);

    while protocol::read_turn(input, &mut state)? {
        if trace {
            match serde_json::to_string(&state) {
                Ok(json) => eprintln!("{}", json),
                Err(e) => eprintln!("trace failed: {}", e),
            }
        }
        let commands = agent.act(&state);
        write_commands(output, &commands).map_err(|e| format!("write error: {}", e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two 3×2 turns end to end: the heuristic bot should request a radar
    // with its first robot and wait with the second, both turns.
    const SESSION: &str = "\
3 2
0 0
? 0 ? 0 ? 0
? 0 ? 0 ? 0
2 0 0
0 0 1 0 -1
1 0 2 1 -1
0 0
? 0 ? 0 ? 0
? 0 ? 0 ? 0
2 5 0
0 0 1 0 -1
1 0 2 1 -1
";

    #[test]
    fn full_session_produces_one_batch_per_turn() {
        let mut agent = HeuristicAgent::new();
        let mut output = Vec::new();
        run(&mut SESSION.as_bytes(), &mut output, &mut agent, false).unwrap();

        let lines: Vec<_> = String::from_utf8(output).unwrap().lines().map(String::from).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("REQUEST RADAR"));
        assert!(lines[1].starts_with("WAIT"));
        assert!(lines[2].starts_with("REQUEST RADAR"));
        assert!(lines[3].starts_with("WAIT"));
    }

    #[test]
    fn protocol_error_aborts_the_session() {
        let mut agent = HeuristicAgent::new();
        let mut output = Vec::new();
        let err = run(&mut "3 2\n1 oops\n".as_bytes(), &mut output, &mut agent, false);
        assert!(err.is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Snapshot assembler — turns the referee's line protocol into game state
//
// Input per turn:
//   myScore opponentScore
//   height lines of width × (ore|"?" hole)
//   entityCount radarCooldown trapCooldown
//   entityCount lines of: id type x y item
//
// Malformed or missing tokens are fatal: the consumer of our output cannot
// recover from a partial command batch, so we stop instead of guessing.
// EOF at a turn boundary is the clean end of the match.
// ═══════════════════════════════════════════════════════════════════════

use crate::state::{upsert_robot, GameState};
use crate::types::{Coord, EntityKind, Fixture, Item};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

fn next_line(input: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .map_err(|e| format!("read error: {}", e))?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

fn expect_line(input: &mut impl BufRead, what: &str) -> Result<String, String> {
    next_line(input)?.ok_or_else(|| format!("unexpected end of input while reading {}", what))
}

fn parse_token<T>(token: Option<&str>, what: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let token = token.ok_or_else(|| format!("missing {}", what))?;
    token
        .parse()
        .map_err(|e| format!("bad {} {:?}: {}", what, token, e))
}

/// Read the one-off initialization line: `width height`.
pub fn read_init(input: &mut impl BufRead) -> Result<(i32, i32), String> {
    let line = expect_line(input, "board size")?;
    let mut tokens = line.split_whitespace();
    let width = parse_token(tokens.next(), "width")?;
    let height = parse_token(tokens.next(), "height")?;
    Ok((width, height))
}

/// Read one full turn snapshot into `state`. Returns `Ok(false)` when the
/// input ends at the turn boundary, i.e. the match is over.
pub fn read_turn(input: &mut impl BufRead, state: &mut GameState) -> Result<bool, String> {
    let Some(line) = next_line(input)? else {
        return Ok(false);
    };
    let mut tokens = line.split_whitespace();
    state.my_score = parse_token(tokens.next(), "my score")?;
    state.opponent_score = parse_token(tokens.next(), "opponent score")?;

    for y in 0..state.board.height() {
        let line = expect_line(input, "board row")?;
        let mut tokens = line.split_whitespace();
        for x in 0..state.board.width() {
            let ore: Option<u32> = match tokens.next() {
                Some("?") => None,
                token => Some(parse_token(token, "ore amount")?),
            };
            let hole: u8 = parse_token(tokens.next(), "hole flag")?;
            let cell = state.board.cell_mut(Coord::new(x, y));
            cell.ore = ore;
            cell.hole = hole == 1;
        }
    }

    let line = expect_line(input, "entity header")?;
    let mut tokens = line.split_whitespace();
    let entity_count: usize = parse_token(tokens.next(), "entity count")?;
    state.radar_cooldown = parse_token(tokens.next(), "radar cooldown")?;
    state.trap_cooldown = parse_token(tokens.next(), "trap cooldown")?;

    // Radars and traps are rebuilt from scratch; robot registries are
    // upserted so identity survives the turn boundary.
    state.radars.clear();
    state.traps.clear();

    for _ in 0..entity_count {
        let line = expect_line(input, "entity")?;
        let mut tokens = line.split_whitespace();
        let id = parse_token(tokens.next(), "entity id")?;
        let kind = parse_token(tokens.next(), "entity type")?;
        let x = parse_token(tokens.next(), "entity x")?;
        let y = parse_token(tokens.next(), "entity y")?;
        let item = parse_token(tokens.next(), "carried item")?;
        let pos = Coord::new(x, y);
        match EntityKind::from_code(kind)? {
            EntityKind::MyRobot => {
                upsert_robot(&mut state.my_robots, id, pos, Item::from_code(item)?)
            }
            EntityKind::OpponentRobot => {
                upsert_robot(&mut state.opponent_robots, id, pos, Item::from_code(item)?)
            }
            EntityKind::Radar => state.radars.push(Fixture { id, pos }),
            EntityKind::Trap => state.traps.push(Fixture { id, pos }),
        }
    }
    Ok(true)
}

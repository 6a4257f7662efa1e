//! Line-oriented intent decoding.
//!
//! Each stdin line is one command word plus arguments. Movement accepts both
//! compass words and vi keys so transcripts stay short.

use anyhow::{Context, Result, anyhow, bail};
use game_core::{Direction, Position, StatChoice};
use runtime::Intent;

/// Decoded line: either an intent for the session or a client-side query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Intent(Intent),
    Look(Position),
    Help,
}

pub const HELP: &str = "\
commands:
  h j k l y u b n | north south ... | ne nw se sw   move or attack
  . | wait                                           rest one turn
  g | pickup                                         pick up
  d N | drop N     e N | equip N     i N | use N     inventory slot N (0-based)
  > | descend                                        take the stairs
  cursor DIR | target X Y | confirm | cancel         tile selection
  level vitality|strength|agility                    spend a level
  look X Y                                           name what is there
  quit | abandon                                     exit with / without saving";

pub fn parse(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        bail!("empty command");
    };
    let args: Vec<&str> = words.collect();

    if let Some(direction) = direction(verb) {
        return Ok(Command::Intent(Intent::Move(direction)));
    }

    let intent = match verb.to_ascii_lowercase().as_str() {
        "." | "wait" => Intent::Wait,
        "g" | "pickup" => Intent::Pickup,
        "d" | "drop" => Intent::Drop(slot(&args)?),
        "e" | "equip" => Intent::Equip(slot(&args)?),
        "i" | "use" => Intent::Use(slot(&args)?),
        ">" | "descend" => Intent::Descend,
        "cursor" => {
            let word = args.first().context("cursor needs a direction")?;
            Intent::MoveCursor(direction(word).ok_or_else(|| anyhow!("unknown direction {word}"))?)
        }
        "target" => Intent::SelectTile(position(&args)?),
        "confirm" | "enter" => Intent::ConfirmTile,
        "cancel" | "esc" => Intent::Cancel,
        "level" => {
            let word = args.first().context("level needs a stat")?;
            let choice: StatChoice = word
                .to_ascii_lowercase()
                .parse()
                .map_err(|_| anyhow!("unknown stat {word}"))?;
            Intent::LevelUp(choice)
        }
        "quit" => Intent::Quit { save: true },
        "abandon" => Intent::Quit { save: false },
        "look" => return Ok(Command::Look(position(&args)?)),
        "help" | "?" => return Ok(Command::Help),
        other => bail!("unknown command {other}"),
    };
    Ok(Command::Intent(intent))
}

fn direction(word: &str) -> Option<Direction> {
    let direction = match word.to_ascii_lowercase().as_str() {
        "k" | "north" => Direction::North,
        "j" | "south" => Direction::South,
        "l" | "east" => Direction::East,
        "h" | "west" => Direction::West,
        "u" | "ne" | "northeast" => Direction::NorthEast,
        "y" | "nw" | "northwest" => Direction::NorthWest,
        "n" | "se" | "southeast" => Direction::SouthEast,
        "b" | "sw" | "southwest" => Direction::SouthWest,
        _ => return None,
    };
    Some(direction)
}

fn slot(args: &[&str]) -> Result<usize> {
    let raw = args.first().context("missing inventory slot")?;
    raw.parse()
        .with_context(|| format!("invalid inventory slot {raw}"))
}

fn position(args: &[&str]) -> Result<Position> {
    let [x, y] = args else {
        bail!("expected two coordinates");
    };
    let x = x.parse().with_context(|| format!("invalid x coordinate {x}"))?;
    let y = y.parse().with_context(|| format!("invalid y coordinate {y}"))?;
    Ok(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vi_keys_and_words_both_move() {
        assert_eq!(parse("k").unwrap(), Command::Intent(Intent::Move(Direction::North)));
        assert_eq!(parse("SW").unwrap(), Command::Intent(Intent::Move(Direction::SouthWest)));
        assert_eq!(parse("east").unwrap(), Command::Intent(Intent::Move(Direction::East)));
    }

    #[test]
    fn inventory_commands_take_a_slot() {
        assert_eq!(parse("use 2").unwrap(), Command::Intent(Intent::Use(2)));
        assert_eq!(parse("d 0").unwrap(), Command::Intent(Intent::Drop(0)));
        assert!(parse("equip").is_err());
        assert!(parse("equip first").is_err());
    }

    #[test]
    fn targeting_commands() {
        assert_eq!(
            parse("target 4 7").unwrap(),
            Command::Intent(Intent::SelectTile(Position::new(4, 7)))
        );
        assert_eq!(
            parse("cursor ne").unwrap(),
            Command::Intent(Intent::MoveCursor(Direction::NorthEast))
        );
        assert!(parse("target 4").is_err());
        assert_eq!(parse("confirm").unwrap(), Command::Intent(Intent::ConfirmTile));
    }

    #[test]
    fn level_and_quit() {
        assert_eq!(
            parse("level Agility").unwrap(),
            Command::Intent(Intent::LevelUp(StatChoice::Agility))
        );
        assert_eq!(
            parse("abandon").unwrap(),
            Command::Intent(Intent::Quit { save: false })
        );
        assert!(parse("level luck").is_err());
    }

    #[test]
    fn look_is_a_query() {
        assert_eq!(parse("look 1 2").unwrap(), Command::Look(Position::new(1, 2)));
        assert!(parse("").is_err());
        assert!(parse("dance").is_err());
    }
}

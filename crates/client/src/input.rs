//! Line-oriented command parsing.
use std::str::FromStr;

use game_core::{CardinalDirection, Turn};

/// One player command read from stdin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step in an absolute direction (`w`/`a`/`s`/`d`).
    Move(CardinalDirection),
    /// Quarter turn (`q` left, `e` right).
    Turn(Turn),
    /// Step along the current facing (`f`).
    Forward,
    /// Switch the active participant (`p N`, 1-based).
    Switch(usize),
    /// Toggle the full map override (`m`).
    ToggleMap,
    Help,
    /// Redraw without acting (empty line).
    Redraw,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'h' for help)")]
    Unknown(String),

    #[error("'p' expects a participant number, e.g. 'p 2'")]
    MissingParticipant,

    #[error("invalid participant number '{0}'")]
    InvalidParticipant(String),
}

pub const HELP: &str = "\
commands:
  w/a/s/d  move north/west/south/east
  q/e      turn left/right
  f        move forward
  p N      switch to participant N
  m        toggle full map
  h        help
  x        quit";

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Redraw);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "w" => Command::Move(CardinalDirection::North),
            "a" => Command::Move(CardinalDirection::West),
            "s" => Command::Move(CardinalDirection::South),
            "d" => Command::Move(CardinalDirection::East),
            "q" => Command::Turn(Turn::Left),
            "e" => Command::Turn(Turn::Right),
            "f" => Command::Forward,
            "m" => Command::ToggleMap,
            "h" | "help" | "?" => Command::Help,
            "x" | "quit" | "exit" => Command::Quit,
            "p" => {
                let number = words.next().ok_or(InputError::MissingParticipant)?;
                match number.parse::<usize>() {
                    Ok(n) if n > 0 => Command::Switch(n - 1),
                    _ => return Err(InputError::InvalidParticipant(number.to_string())),
                }
            }
            _ => return Err(InputError::Unknown(head.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_to_absolute_directions() {
        assert_eq!("w".parse(), Ok(Command::Move(CardinalDirection::North)));
        assert_eq!("A".parse(), Ok(Command::Move(CardinalDirection::West)));
        assert_eq!(" s ".parse(), Ok(Command::Move(CardinalDirection::South)));
        assert_eq!("d".parse(), Ok(Command::Move(CardinalDirection::East)));
        assert_eq!("q".parse(), Ok(Command::Turn(Turn::Left)));
        assert_eq!("f".parse(), Ok(Command::Forward));
    }

    #[test]
    fn participant_numbers_are_one_based() {
        assert_eq!("p 2".parse(), Ok(Command::Switch(1)));
        assert_eq!("p".parse::<Command>(), Err(InputError::MissingParticipant));
        assert_eq!(
            "p 0".parse::<Command>(),
            Err(InputError::InvalidParticipant("0".into()))
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!("".parse(), Ok(Command::Redraw));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(InputError::Unknown("jump".into()))
        );
    }
}

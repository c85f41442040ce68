//! Commands accepted by the cleaning robot and the headings it can face

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A single discrete command for the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one cell in the direction of the current heading (`f`)
    Forward,
    /// Rotate 90 degrees anticlockwise on the spot (`l`)
    TurnLeft,
    /// Rotate 90 degrees clockwise on the spot (`r`)
    TurnRight,
}

/// The compass direction the robot is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Errors raised when parsing command or heading symbols.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Unknown command symbol '{0}', expected one of 'f', 'l' or 'r'")]
    UnknownCommand(char),

    #[error("Unknown heading symbol '{0}', expected one of 'N', 'E', 'S' or 'W'")]
    UnknownHeading(char),

    #[error("Expected a single symbol, found \"{0}\"")]
    NotASymbol(String),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Command {
    /// The symbol used for this command in command sequences.
    pub fn symbol(&self) -> char {
        match self {
            Command::Forward => 'f',
            Command::TurnLeft => 'l',
            Command::TurnRight => 'r',
        }
    }
}

impl TryFrom<char> for Command {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'f' => Ok(Command::Forward),
            'l' => Ok(Command::TurnLeft),
            'r' => Ok(Command::TurnRight),
            _ => Err(SymbolError::UnknownCommand(c)),
        }
    }
}

impl FromStr for Command {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::try_from(single_char(s)?)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Heading {
    /// The heading reached by turning left (anticlockwise) once.
    ///
    /// N -> W -> S -> E -> N
    pub fn left(&self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// The heading reached by turning right (clockwise) once.
    ///
    /// N -> E -> S -> W -> N
    pub fn right(&self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit step `(dx, dy)` taken by a forward move along this heading.
    pub fn step(&self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// The symbol used for this heading in status strings.
    pub fn symbol(&self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(SymbolError::UnknownHeading(c)),
        }
    }
}

impl FromStr for Heading {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::try_from(single_char(s)?)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Parse a sequence of command symbols such as `"ffrf"` or `"f, l, f"`.
///
/// Whitespace and commas between symbols are ignored.
pub fn parse_commands(seq: &str) -> Result<Vec<Command>, SymbolError> {
    seq.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(Command::try_from)
        .collect()
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn single_char(s: &str) -> Result<char, SymbolError> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SymbolError::NotASymbol(s.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const HEADINGS: [Heading; 4] =
        [Heading::North, Heading::East, Heading::South, Heading::West];

    #[test]
    fn test_rotation_is_a_four_cycle() {
        for h in HEADINGS.iter() {
            assert_eq!(h.left().left().left().left(), *h);
            assert_eq!(h.right().right().right().right(), *h);
            assert_ne!(h.left(), *h);
            assert_ne!(h.right(), *h);
        }
    }

    #[test]
    fn test_left_and_right_are_inverses() {
        for h in HEADINGS.iter() {
            assert_eq!(h.left().right(), *h);
            assert_eq!(h.right().left(), *h);
        }
    }

    #[test]
    fn test_right_is_clockwise() {
        assert_eq!(Heading::North.right(), Heading::East);
        assert_eq!(Heading::East.right(), Heading::South);
        assert_eq!(Heading::South.right(), Heading::West);
        assert_eq!(Heading::West.right(), Heading::North);
        assert_eq!(Heading::North.left(), Heading::West);
    }

    #[test]
    fn test_step_moves_one_axis() {
        for h in HEADINGS.iter() {
            let (dx, dy) = h.step();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Heading::South.step(), (0, -1));
        assert_eq!(Heading::West.step(), (-1, 0));
    }

    #[test]
    fn test_symbols() {
        assert_eq!("f".parse::<Command>(), Ok(Command::Forward));
        assert_eq!(Command::TurnRight.to_string(), "r");
        assert_eq!(Command::try_from('x'), Err(SymbolError::UnknownCommand('x')));
        assert_eq!("W".parse::<Heading>(), Ok(Heading::West));
        assert_eq!(Heading::East.to_string(), "E");
        assert_eq!(Heading::try_from('n'), Err(SymbolError::UnknownHeading('n')));
        assert_eq!(
            "fl".parse::<Command>(),
            Err(SymbolError::NotASymbol("fl".into()))
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_commands("f, l r\nf"),
            Ok(vec![
                Command::Forward,
                Command::TurnLeft,
                Command::TurnRight,
                Command::Forward
            ])
        );
        assert_eq!(parse_commands(""), Ok(vec![]));
        assert_eq!(parse_commands("ffb"), Err(SymbolError::UnknownCommand('b')));
    }
}

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use stickercube_core::{Cube, Direction, Face};

/// Amount to turn a face by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Clockwise quarter turn (no suffix).
    Clockwise,
    /// Counterclockwise quarter turn (`'` suffix).
    CounterClockwise,
    /// Half turn (`2` suffix).
    Double,
}

impl Turn {
    /// All turn amounts, in order.
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

    /// Returns the notation suffix for the turn.
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|turn| turn.suffix() == s)
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }
}

/// Turn of the outer layer of one face, as seen looking at that face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// Amount to turn it by.
    pub turn: Turn,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", face_letter(self.face), self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = InvalidMoveToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(InvalidMoveToken::Empty)?;
        let face = face_from_letter(first).ok_or_else(|| InvalidMoveToken::BadFace(s.to_owned()))?;
        let turn =
            Turn::from_suffix(chars.as_str()).ok_or_else(|| InvalidMoveToken::BadSuffix(s.to_owned()))?;
        Ok(Move { face, turn })
    }
}

impl Move {
    /// Constructs a move.
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }

    /// Applies the move to a cube.
    pub fn apply(self, cube: &mut Cube) {
        if cube.size() == 0 {
            return;
        }
        log::debug!("applying move {self}");
        let layer = self.face.layer(cube.size());
        // On a 1x1x1 cube, every face is in the near half.
        let seen_from_far_face = matches!(self.face, Face::Right | Face::Top | Face::Back);
        let clockwise = match seen_from_far_face == layer.is_far_half(cube.size()) {
            true => Direction::Clockwise,
            false => Direction::CounterClockwise,
        };
        match self.turn {
            Turn::Clockwise => cube.rotate(layer, clockwise),
            Turn::CounterClockwise => cube.rotate(layer, clockwise.rev()),
            Turn::Double => {
                cube.rotate(layer, clockwise);
                cube.rotate(layer, clockwise);
            }
        }
    }
}

fn face_letter(face: Face) -> char {
    match face {
        Face::Front => 'F',
        Face::Top => 'U',
        Face::Right => 'R',
        Face::Back => 'B',
        Face::Left => 'L',
        Face::Bottom => 'D',
    }
}

fn face_from_letter(c: char) -> Option<Face> {
    Face::ALL.into_iter().find(|&face| face_letter(face) == c)
}

/// Parses a sequence of whitespace-separated moves.
pub fn parse_moves(s: &str) -> impl '_ + Iterator<Item = Result<Move, InvalidMoveToken>> {
    s.split_whitespace().map(str::parse)
}

/// Applies a sequence of whitespace-separated moves to a cube, skipping
/// invalid tokens.
///
/// Returns the number of tokens that were skipped.
pub fn apply_moves(cube: &mut Cube, s: &str) -> usize {
    let mut skipped = 0;
    for result in parse_moves(s) {
        match result {
            Ok(m) => m.apply(cube),
            Err(e) => {
                log::debug!("ignoring {e}");
                skipped += 1;
            }
        }
    }
    skipped
}

/// Formats a sequence of moves as a string.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().join(" ")
}

/// Error encountered while parsing a move.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveToken {
    #[error("empty move")]
    Empty,
    #[error("bad face in move {0:?}")]
    BadFace(String),
    #[error("bad suffix in move {0:?}")]
    BadSuffix(String),
}

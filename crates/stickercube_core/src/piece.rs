use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{Axis, Color, Direction, FACE_COUNT, Face};

/// Sticker state at one position of a cube: one optional sticker per face.
///
/// A slot is `None` unless the piece touches the outer layer of that face.
/// Corners have three stickers, edges two, centers one, and interior pieces
/// none.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece([Option<Color>; FACE_COUNT]);

impl Index<Face> for Piece {
    type Output = Option<Color>;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face.index()]
    }
}

impl IndexMut<Face> for Piece {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face.index()]
    }
}

/// Draws the piece as a cross, with the top sticker above the left, front,
/// right, and back stickers, and the bottom sticker below them.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = |face: Face| Color::letter_or_dash(self[face]);
        writeln!(f, "  {}", letter(Face::Top))?;
        writeln!(
            f,
            "{} {} {} {}",
            letter(Face::Left),
            letter(Face::Front),
            letter(Face::Right),
            letter(Face::Back),
        )?;
        write!(f, "  {}", letter(Face::Bottom))
    }
}

impl Piece {
    /// Piece with no stickers.
    pub const EMPTY: Self = Self([None; FACE_COUNT]);

    /// Returns a piece with a single sticker.
    pub fn with_color(face: Face, color: Color) -> Self {
        Self::EMPTY.add_color(face, color)
    }

    /// Returns a piece with a single sticker of the face's default color.
    pub fn with_default_face(face: Face) -> Self {
        Self::with_color(face, face.default_color())
    }

    /// Returns the piece with a sticker added (or replaced) on `face`.
    #[must_use]
    pub fn add_color(mut self, face: Face, color: Color) -> Self {
        self[face] = Some(color);
        self
    }

    /// Returns the piece with a sticker of the face's default color added (or
    /// replaced) on `face`.
    #[must_use]
    pub fn add_default_face(self, face: Face) -> Self {
        self.add_color(face, face.default_color())
    }

    /// Returns whether the piece has a sticker on `face`.
    pub fn has(&self, face: Face) -> bool {
        self[face].is_some()
    }

    /// Returns an iterator over the faces with stickers and their colors.
    pub fn stickers(&self) -> impl '_ + Iterator<Item = (Face, Color)> {
        Face::ALL
            .into_iter()
            .filter_map(move |face| Some((face, self[face]?)))
    }

    /// Returns the number of stickers on the piece.
    pub fn sticker_count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Reorients the piece's stickers for a quarter turn around `axis`.
    ///
    /// `direction` is as seen from the near face along `axis` (left, bottom,
    /// or front). The two stickers parallel to the axis stay put.
    pub fn rotate(&mut self, axis: Axis, direction: Direction) {
        let cycle = axis.sticker_cycle();
        let mut colors = cycle.map(|face| self[face]);
        match direction {
            Direction::Clockwise => colors.rotate_left(1),
            Direction::CounterClockwise => colors.rotate_right(1),
        }
        for (face, color) in cycle.into_iter().zip(colors) {
            self[face] = color;
        }
    }
}

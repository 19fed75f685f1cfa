use std::fmt;

use strum::Display;

use crate::{Color, IndexOutOfRange};

/// Axis of rotation.
///
/// - X points from the left face to the right face.
/// - Y points from the bottom face to the top face.
/// - Z points from the front face to the back face.
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Left-to-right axis.
    X,
    /// Bottom-to-top axis.
    Y,
    /// Front-to-back axis.
    Z,
}

impl Axis {
    /// All axes, in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the four faces perpendicular to the axis, in the order that a
    /// clockwise turn (seen from the near face) cycles stickers: each face
    /// receives the sticker from the face after it.
    pub(crate) fn sticker_cycle(self) -> [Face; 4] {
        use Face::*;

        match self {
            Axis::X => [Top, Back, Bottom, Front],
            Axis::Y => [Front, Left, Back, Right],
            Axis::Z => [Top, Left, Bottom, Right],
        }
    }
}

/// Face of a cube.
///
/// The declaration order is the order of sticker slots in a [`crate::Piece`].
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Face at the maximum Y coordinate.
    Top,
    /// Face at the minimum X coordinate.
    Left,
    /// Face at the minimum Z coordinate.
    Front,
    /// Face at the maximum X coordinate.
    Right,
    /// Face at the maximum Z coordinate.
    Back,
    /// Face at the minimum Y coordinate.
    Bottom,
}

impl Face {
    /// All faces, in sticker slot order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Bottom,
    ];

    /// Returns the index of the face's sticker slot in a piece.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Top | Face::Bottom => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Returns the outer layer containing the face on a cube with side length
    /// `size`.
    pub fn layer(self, size: usize) -> Layer {
        let far = size.saturating_sub(1);
        match self {
            Face::Top => Layer::unchecked(Axis::Y, far),
            Face::Left => Layer::unchecked(Axis::X, 0),
            Face::Front => Layer::unchecked(Axis::Z, 0),
            Face::Right => Layer::unchecked(Axis::X, far),
            Face::Back => Layer::unchecked(Axis::Z, far),
            Face::Bottom => Layer::unchecked(Axis::Y, 0),
        }
    }

    /// Returns the color of the face's stickers on a solved cube.
    pub fn default_color(self) -> Color {
        match self {
            Face::Top => Color::White,
            Face::Left => Color::Orange,
            Face::Front => Color::Green,
            Face::Right => Color::Red,
            Face::Back => Color::Blue,
            Face::Bottom => Color::Yellow,
        }
    }
}

/// Direction of a quarter turn, as seen from outside the cube looking at the
/// turning layer.
#[derive(Display, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Clockwise quarter turn.
    #[default]
    Clockwise,
    /// Counterclockwise quarter turn.
    CounterClockwise,
}

impl Direction {
    /// Returns `Clockwise` if `clockwise` is true and `CounterClockwise`
    /// otherwise.
    pub fn from_clockwise(clockwise: bool) -> Self {
        match clockwise {
            true => Direction::Clockwise,
            false => Direction::CounterClockwise,
        }
    }

    /// Returns whether the direction is clockwise.
    pub fn is_clockwise(self) -> bool {
        self == Direction::Clockwise
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Slice of pieces perpendicular to an axis at a particular depth.
///
/// Depth 0 contains the left, bottom, or front face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
    /// Axis perpendicular to the layer.
    pub axis: Axis,
    /// Distance from the near face along `axis`, in pieces.
    pub depth: usize,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis, self.depth)
    }
}

impl Layer {
    /// Constructs a layer, checking that `depth` is within a cube with side
    /// length `size`.
    pub fn new(axis: Axis, depth: usize, size: usize) -> Result<Self, IndexOutOfRange> {
        if depth < size {
            Ok(Self::unchecked(axis, depth))
        } else {
            Err(IndexOutOfRange::Depth { axis, depth, size })
        }
    }

    const fn unchecked(axis: Axis, depth: usize) -> Self {
        Self { axis, depth }
    }

    /// Returns whether the layer is in the far half of a cube with side
    /// length `size`, which is the half containing the right, top, or back
    /// face.
    ///
    /// Cubes with an even side length are split into two equal halves. The
    /// middle layer of a cube with an odd side length belongs to the near
    /// half.
    pub fn is_far_half(self, size: usize) -> bool {
        2 * self.depth >= size
    }

    /// Returns the outer face contained by the layer, if there is one.
    pub fn face(self, size: usize) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|&face| face.axis() == self.axis && face.layer(size) == self)
    }
}

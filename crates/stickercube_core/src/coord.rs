use std::fmt;

use crate::{Face, IndexOutOfRange};

/// Position of a piece within a cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Position from left to right.
    pub x: usize,
    /// Position from bottom to top.
    pub y: usize,
    /// Position from front to back.
    pub z: usize,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Coord {
    /// Constructs a coordinate.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Returns the linear index of the coordinate in a cube with side length
    /// `size`. See [`index()`].
    pub fn index(self, size: usize) -> Result<usize, IndexOutOfRange> {
        index(size, self)
    }

    /// Decodes a linear index in a cube with side length `size`.
    pub fn from_index(index: usize, size: usize) -> Result<Self, IndexOutOfRange> {
        let layer_area = size * size;
        if index >= layer_area * size {
            return Err(IndexOutOfRange::Linear { index, size });
        }
        Ok(Self::decode(index, size))
    }

    /// Decodes a linear index that is already known to be in range.
    pub(crate) fn decode(index: usize, size: usize) -> Self {
        let layer_area = size * size;
        let z = index / layer_area;
        let within_layer = index % layer_area;
        Self {
            x: within_layer % size,
            y: within_layer / size,
            z,
        }
    }

    /// Returns whether the coordinate lies on the outer layer of `face` in a
    /// cube with side length `size`.
    pub fn is_on_face(self, face: Face, size: usize) -> bool {
        let far = size.saturating_sub(1);
        match face {
            Face::Top => self.y == far,
            Face::Left => self.x == 0,
            Face::Front => self.z == 0,
            Face::Right => self.x == far,
            Face::Back => self.z == far,
            Face::Bottom => self.y == 0,
        }
    }
}

/// Returns the linear index `(z * size + y) * size + x` of a coordinate in a
/// cube with side length `size`, or an error if any component is out of
/// range.
pub fn index(size: usize, coord: Coord) -> Result<usize, IndexOutOfRange> {
    let Coord { x, y, z } = coord;
    if x < size && y < size && z < size {
        Ok((z * size + y) * size + x)
    } else {
        Err(IndexOutOfRange::Coord { x, y, z, size })
    }
}

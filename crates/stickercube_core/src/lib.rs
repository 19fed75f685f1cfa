//! Sticker model and layer rotation engine for N×N×N cubes.
//!
//! A [`Cube`] stores one [`Piece`] per position in a flattened array. Every
//! layer-relative operation (turning, solved-state detection, rendering) goes
//! through a [`PlaneMapping`], which maps 2D layer-local coordinates onto the
//! cube as seen from outside.

/// Panics in debug builds and logs an error in release builds.
///
/// Use this for contract breaches that should never happen.
macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

mod color;
mod coord;
mod cube;
mod errors;
mod face;
mod mapping;
mod piece;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::coord::{Coord, index};
    pub use crate::cube::Cube;
    pub use crate::errors::IndexOutOfRange;
    pub use crate::face::{Axis, Direction, Face, Layer};
    pub use crate::mapping::PlaneMapping;
    pub use crate::piece::Piece;
}

/// Number of faces on a cube, and therefore the number of sticker slots on a
/// piece.
pub const FACE_COUNT: usize = 6;

#[cfg(test)]
mod tests;

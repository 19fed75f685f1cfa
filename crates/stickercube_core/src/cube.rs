use std::collections::HashMap;

use itertools::{Itertools, iproduct};

use crate::{Color, Coord, Direction, Face, IndexOutOfRange, Layer, Piece, PlaneMapping};

/// N×N×N cube with stickers.
///
/// Pieces are stored in a flattened array indexed by
/// `(z * size + y) * size + x`; see [`crate::index()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    size: usize,
    pieces: Vec<Piece>,
}

impl Cube {
    /// Constructs a solved cube with side length `size`.
    pub fn new_solved(size: usize) -> Self {
        let pieces = iproduct!(0..size, 0..size, 0..size)
            .map(|(z, y, x)| {
                let coord = Coord::new(x, y, z);
                Face::ALL
                    .into_iter()
                    .filter(|&face| coord.is_on_face(face, size))
                    .fold(Piece::EMPTY, Piece::add_default_face)
            })
            .collect();
        Self { size, pieces }
    }

    /// Returns the side length of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns all pieces, in linear index order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the piece at a position.
    pub fn piece(&self, coord: Coord) -> Result<&Piece, IndexOutOfRange> {
        Ok(&self.pieces[coord.index(self.size)?])
    }

    /// Returns the piece at a linear index.
    pub fn piece_at_index(&self, index: usize) -> Result<&Piece, IndexOutOfRange> {
        self.pieces.get(index).ok_or(IndexOutOfRange::Linear {
            index,
            size: self.size,
        })
    }

    /// Returns the plane mapping for a layer of this cube.
    pub fn mapping(&self, layer: Layer) -> Result<PlaneMapping, IndexOutOfRange> {
        PlaneMapping::new(layer, self.size)
    }

    /// Turns a layer by 90 degrees.
    ///
    /// `direction` is as seen from the outside of the cube, looking at the
    /// half of the cube that contains the layer (see [`PlaneMapping`]).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the layer is out of range. In release builds
    /// the error is logged and the cube is left unchanged.
    pub fn rotate(&mut self, layer: Layer, direction: Direction) {
        let mapping = match self.mapping(layer) {
            Ok(mapping) => mapping,
            Err(e) => {
                debug_panic!("cannot rotate layer {layer}: {e}");
                return;
            }
        };
        log::trace!("rotating layer {layer} {direction}");

        let n = self.size;
        let mut swap = |(lx1, ly1): (usize, usize), (lx2, ly2): (usize, usize)| {
            self.pieces
                .swap(mapping.index(lx1, ly1), mapping.index(lx2, ly2));
        };

        // Flip, then transpose. Which flip determines the direction.
        match direction {
            Direction::Clockwise => {
                for (ly, lx) in iproduct!(0..n / 2, 0..n) {
                    swap((lx, ly), (lx, n - 1 - ly));
                }
            }
            Direction::CounterClockwise => {
                for (ly, lx) in iproduct!(0..n, 0..n / 2) {
                    swap((lx, ly), (n - 1 - lx, ly));
                }
            }
        }
        for ly in 0..n {
            for lx in ly + 1..n {
                swap((lx, ly), (ly, lx));
            }
        }

        // Piece orientations are always relative to the near face.
        let piece_direction = match layer.is_far_half(n) {
            true => direction.rev(),
            false => direction,
        };
        for ly in 0..n {
            for i in mapping.row(ly) {
                self.pieces[i].rotate(layer.axis, piece_direction);
            }
        }
    }

    /// Returns whether every sticker on every face has that face's default
    /// color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| self.is_face_solved(face))
    }

    /// Returns whether every sticker on `face` has the face's default color.
    pub fn is_face_solved(&self, face: Face) -> bool {
        let expected = Some(face.default_color());
        self.face_stickers(face)
            .iter()
            .flatten()
            .all(|&sticker| sticker == expected)
    }

    /// Returns the faces that are not solved.
    pub fn unsolved_faces(&self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|&face| !self.is_face_solved(face))
            .collect()
    }

    /// Returns the stickers on `face` as rows from top to bottom, as seen from
    /// outside the cube.
    pub fn face_stickers(&self, face: Face) -> Vec<Vec<Option<Color>>> {
        let Ok(mapping) = self.mapping(face.layer(self.size)) else {
            return vec![]; // empty cube
        };
        (0..self.size)
            .map(|ly| mapping.row(ly).map(|i| self.pieces[i][face]).collect())
            .collect()
    }

    /// Returns the number of stickers of each color on the whole cube.
    pub fn sticker_counts(&self) -> HashMap<Color, usize> {
        self.pieces
            .iter()
            .flat_map(|piece| piece.stickers().map(|(_face, color)| color))
            .counts()
    }
}

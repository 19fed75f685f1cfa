use itertools::iproduct;

use crate::{Axis, Coord, IndexOutOfRange, Layer};

/// Map from 2D layer-local coordinates `(lx, ly)` to positions in a cube.
///
/// The layer is laid out as seen from outside the cube, looking at the face
/// on the same half of the cube as the layer: left, bottom, or front for the
/// near half, and right, top, or back for the far half. `lx` increases to
/// the right and `ly` increases downward. The same layout is used for
/// turning layers and for drawing faces.
///
/// Internally this is a base linear index plus one stride for each
/// layer-local axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PlaneMapping {
    layer: Layer,
    size: usize,
    base: usize,
    x_stride: isize,
    y_stride: isize,
}

impl PlaneMapping {
    /// Constructs the mapping for `layer` in a cube with side length `size`.
    pub fn new(layer: Layer, size: usize) -> Result<Self, IndexOutOfRange> {
        let Layer { axis, depth } = Layer::new(layer.axis, layer.depth, size)?;

        let far = size - 1;
        let row = size as isize;
        let area = row * row;

        #[rustfmt::skip]
        let (base, x_stride, y_stride) = match (axis, layer.is_far_half(size)) {
            // seen from the left: Z decreases to the right, Y decreases downward
            (Axis::X, false) => (Coord::new(depth, far, far), -area, -row),
            // seen from the right: Z increases to the right, Y decreases downward
            (Axis::X, true)  => (Coord::new(depth, far, 0),    area, -row),
            // seen from below: X increases to the right, Z increases downward
            (Axis::Y, false) => (Coord::new(0, depth, 0),      1,     area),
            // seen from above: X increases to the right, Z decreases downward
            (Axis::Y, true)  => (Coord::new(0, depth, far),    1,    -area),
            // seen from the front: X increases to the right, Y decreases downward
            (Axis::Z, false) => (Coord::new(0, far, depth),    1,    -row),
            // seen from the back: X decreases to the right, Y decreases downward
            (Axis::Z, true)  => (Coord::new(far, far, depth), -1,    -row),
        };

        Ok(Self {
            layer,
            size,
            base: base.index(size)?,
            x_stride,
            y_stride,
        })
    }

    /// Returns the layer enumerated by the mapping.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Returns the side length of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the linear index of the piece at `(lx, ly)`.
    ///
    /// Both coordinates must be less than the side length of the cube.
    pub(crate) fn index(&self, lx: usize, ly: usize) -> usize {
        debug_assert!(lx < self.size && ly < self.size, "({lx}, {ly}) out of plane");
        let offset = lx as isize * self.x_stride + ly as isize * self.y_stride;
        self.base.wrapping_add_signed(offset)
    }

    /// Returns the position of the piece at `(lx, ly)`, or an error if either
    /// coordinate is outside the layer.
    pub fn coord(&self, lx: usize, ly: usize) -> Result<Coord, IndexOutOfRange> {
        if lx < self.size && ly < self.size {
            Ok(Coord::decode(self.index(lx, ly), self.size))
        } else {
            Err(IndexOutOfRange::Plane {
                lx,
                ly,
                size: self.size,
            })
        }
    }

    /// Returns an iterator over `(lx, ly, coord)` for every position in the
    /// layer, row by row from the top.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Coord)> {
        let this = *self;
        iproduct!(0..self.size, 0..self.size)
            .map(move |(ly, lx)| (lx, ly, Coord::decode(this.index(lx, ly), this.size)))
    }

    /// Returns an iterator over the linear indices in one row of the layer,
    /// from left to right.
    pub fn row(&self, ly: usize) -> impl Iterator<Item = usize> {
        let this = *self;
        (0..self.size).map(move |lx| this.index(lx, ly))
    }
}

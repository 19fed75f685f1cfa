use thiserror::Error;

use crate::Axis;

/// Error when a coordinate, linear index, layer-local coordinate, or layer
/// depth is outside a cube.
///
/// This indicates a bug in the caller; well-formed code never produces it.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IndexOutOfRange {
    /// Coordinate outside `0..size`
    #[error("coordinate ({x}, {y}, {z}) out of range for {size}x{size}x{size} cube")]
    Coord {
        /// X coordinate.
        x: usize,
        /// Y coordinate.
        y: usize,
        /// Z coordinate.
        z: usize,
        /// Side length of the cube.
        size: usize,
    },
    /// Linear index outside `0..size³`
    #[error("linear index {index} out of range for {size}x{size}x{size} cube")]
    Linear {
        /// Linear index.
        index: usize,
        /// Side length of the cube.
        size: usize,
    },
    /// Layer-local coordinate outside `0..size`
    #[error("layer coordinate ({lx}, {ly}) out of range for {size}x{size} layer")]
    Plane {
        /// Layer-local X coordinate.
        lx: usize,
        /// Layer-local Y coordinate.
        ly: usize,
        /// Side length of the cube.
        size: usize,
    },
    /// Layer depth outside `0..size`
    #[error("layer {axis} depth {depth} out of range for {size}x{size}x{size} cube")]
    Depth {
        /// Axis of the layer.
        axis: Axis,
        /// Depth of the layer along the axis.
        depth: usize,
        /// Side length of the cube.
        size: usize,
    },
}

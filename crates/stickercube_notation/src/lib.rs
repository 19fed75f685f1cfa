//! Face-turn notation and scramble generation for [`stickercube_core`] cubes.
//!
//! Each move is a face letter (`F`, `U`, `R`, `B`, `L`, or `D`) followed by
//! an optional `'` for a counterclockwise turn or `2` for a half turn. Only
//! the outer layer of each face can be turned with notation.

mod moves;
mod scramble;

pub use moves::{InvalidMoveToken, Move, Turn, apply_moves, format_moves, parse_moves};
pub use scramble::{random_move, random_scramble};

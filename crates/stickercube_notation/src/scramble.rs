use rand::Rng;
use stickercube_core::Face;

use crate::{Move, Turn};

/// Faces in the order scramble letters are drawn from.
const SCRAMBLE_FACES: [Face; 6] = [
    Face::Left,
    Face::Right,
    Face::Bottom,
    Face::Top,
    Face::Front,
    Face::Back,
];

/// Returns a uniformly random move.
pub fn random_move(rng: &mut impl Rng) -> Move {
    let face = SCRAMBLE_FACES[rng.random_range(0..SCRAMBLE_FACES.len())];
    let turn = Turn::ALL[rng.random_range(0..Turn::ALL.len())];
    Move { face, turn }
}

/// Returns a scramble of `len` uniformly random moves.
///
/// The same seeded `rng` always produces the same scramble.
pub fn random_scramble(rng: &mut impl Rng, len: usize) -> Vec<Move> {
    std::iter::from_fn(|| Some(random_move(rng)))
        .take(len)
        .collect()
}


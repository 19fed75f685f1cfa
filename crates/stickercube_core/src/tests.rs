use std::collections::{HashMap, HashSet};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::*;

const SIZES: std::ops::RangeInclusive<usize> = 1..=5;
const TURNABLE_SIZES: std::ops::RangeInclusive<usize> = 2..=5;

fn all_layers(size: usize) -> impl Iterator<Item = Layer> {
    Axis::ALL
        .into_iter()
        .flat_map(move |axis| (0..size).map(move |depth| Layer { axis, depth }))
}

fn all_directions() -> [Direction; 2] {
    [Direction::Clockwise, Direction::CounterClockwise]
}

/// Returns a cube with every layer turned once, so that most pieces are out
/// of place and misoriented.
fn messy_cube(size: usize) -> Cube {
    let mut cube = Cube::new_solved(size);
    for layer in all_layers(size) {
        cube.rotate(layer, Direction::from_clockwise(layer.depth % 2 == 0));
    }
    cube
}

fn assert_stickers_on_boundary(cube: &Cube) {
    let n = cube.size();
    for (i, piece) in cube.pieces().iter().enumerate() {
        let coord = Coord::from_index(i, n).unwrap();
        for face in Face::ALL {
            assert_eq!(
                coord.is_on_face(face, n),
                piece.has(face),
                "{face} sticker at {coord} on {n}x{n}x{n}",
            );
        }
    }
}

fn column(rows: &[Vec<Option<Color>>], lx: usize) -> Vec<Option<Color>> {
    rows.iter().map(|row| row[lx]).collect()
}

#[test]
fn test_solved_cube_is_solved() {
    for n in SIZES {
        let cube = Cube::new_solved(n);
        assert!(cube.is_solved(), "{n}x{n}x{n}");
        assert_eq!(cube.pieces().len(), n * n * n);
        assert_stickers_on_boundary(&cube);
    }
}

#[test]
fn test_solved_piece_kinds() {
    let cube = Cube::new_solved(3);
    let count_with = |stickers| {
        cube.pieces()
            .iter()
            .filter(|piece| piece.sticker_count() == stickers)
            .count()
    };
    assert_eq!(count_with(3), 8); // corners
    assert_eq!(count_with(2), 12); // edges
    assert_eq!(count_with(1), 6); // centers
    assert_eq!(count_with(0), 1); // core
}

#[test]
fn test_index() {
    assert_eq!(index(3, Coord::new(1, 2, 0)), Ok(7));
    assert_eq!(index(3, Coord::new(2, 2, 2)), Ok(26));
    assert_eq!(index(4, Coord::new(3, 0, 1)), Ok(19));
    assert_eq!(
        index(3, Coord::new(0, 3, 0)),
        Err(IndexOutOfRange::Coord {
            x: 0,
            y: 3,
            z: 0,
            size: 3,
        }),
    );

    assert_eq!(Coord::from_index(19, 4), Ok(Coord::new(3, 0, 1)));
    assert_eq!(
        Coord::from_index(27, 3),
        Err(IndexOutOfRange::Linear { index: 27, size: 3 }),
    );
}

#[test]
fn test_layer_range() {
    assert_eq!(Layer::new(Axis::Z, 2, 3), Ok(Layer { axis: Axis::Z, depth: 2 }));
    assert_eq!(
        Layer::new(Axis::Z, 3, 3),
        Err(IndexOutOfRange::Depth {
            axis: Axis::Z,
            depth: 3,
            size: 3,
        }),
    );
    assert!(Cube::new_solved(3).mapping(Layer { axis: Axis::X, depth: 5 }).is_err());
}

#[test]
fn test_layer_halves() {
    let far_depths = |n| {
        (0..n)
            .filter(|&depth| Layer { axis: Axis::X, depth }.is_far_half(n))
            .collect::<Vec<_>>()
    };
    assert_eq!(far_depths(1), Vec::<usize>::new());
    assert_eq!(far_depths(2), vec![1]);
    assert_eq!(far_depths(3), vec![2]);
    assert_eq!(far_depths(4), vec![2, 3]);
    assert_eq!(far_depths(5), vec![3, 4]);
}

#[test]
fn test_face_layers() {
    for n in SIZES {
        for face in Face::ALL {
            let layer = face.layer(n);
            assert_eq!(layer.axis, face.axis());
            if n > 1 {
                assert_eq!(layer.face(n), Some(face));
            }
        }
    }
    assert_eq!(Face::Top.layer(3), Layer { axis: Axis::Y, depth: 2 });
    assert_eq!(Face::Front.layer(3), Layer { axis: Axis::Z, depth: 0 });
    assert_eq!(Layer { axis: Axis::Y, depth: 1 }.face(3), None);
}

#[test]
fn test_top_layer_mapping() {
    let mapping = PlaneMapping::new(Layer { axis: Axis::Y, depth: 2 }, 3).unwrap();
    let coords = mapping.iter().map(|(_, _, coord)| coord).collect::<Vec<_>>();
    assert_eq!(coords.len(), 9);

    let expected = (0..3)
        .flat_map(|x| (0..3).map(move |z| Coord::new(x, 2, z)))
        .collect::<HashSet<_>>();
    assert_eq!(coords.into_iter().collect::<HashSet<_>>(), expected);
}

#[test]
fn test_mappings_are_bijections() {
    for n in SIZES {
        for layer in all_layers(n) {
            let mapping = PlaneMapping::new(layer, n).unwrap();
            let coords = mapping.iter().map(|(_, _, coord)| coord).collect::<HashSet<_>>();
            assert_eq!(coords.len(), n * n, "{layer} on {n}x{n}x{n}");
            for coord in coords {
                let depth = match layer.axis {
                    Axis::X => coord.x,
                    Axis::Y => coord.y,
                    Axis::Z => coord.z,
                };
                assert_eq!(depth, layer.depth, "{coord} in {layer} on {n}x{n}x{n}");
            }
        }
    }
}

#[test]
fn test_face_mappings_seen_from_outside() {
    let n = 3;
    let face_mapping = |face: Face| PlaneMapping::new(face.layer(n), n).unwrap();

    // Top-left corner of each face in the net.
    assert_eq!(face_mapping(Face::Front).coord(0, 0), Ok(Coord::new(0, 2, 0)));
    assert_eq!(face_mapping(Face::Right).coord(0, 0), Ok(Coord::new(2, 2, 0)));
    assert_eq!(face_mapping(Face::Back).coord(0, 0), Ok(Coord::new(2, 2, 2)));
    assert_eq!(face_mapping(Face::Left).coord(0, 0), Ok(Coord::new(0, 2, 2)));
    assert_eq!(face_mapping(Face::Top).coord(0, 0), Ok(Coord::new(0, 2, 2)));
    assert_eq!(face_mapping(Face::Bottom).coord(0, 0), Ok(Coord::new(0, 0, 0)));

    // The bottom row of the top face touches the top row of the front face.
    for lx in 0..n {
        assert_eq!(
            face_mapping(Face::Top).coord(lx, n - 1),
            face_mapping(Face::Front).coord(lx, 0),
        );
    }

    assert_eq!(
        face_mapping(Face::Front).coord(3, 0),
        Err(IndexOutOfRange::Plane { lx: 3, ly: 0, size: 3 }),
    );
    assert_eq!(
        face_mapping(Face::Top).coord(1, 7),
        Err(IndexOutOfRange::Plane { lx: 1, ly: 7, size: 3 }),
    );
}

#[test]
fn test_piece_accessors() {
    let cube = Cube::new_solved(3);

    // front-top-right corner
    let coord = Coord::new(2, 2, 0);
    let corner = Piece::with_default_face(Face::Top)
        .add_default_face(Face::Front)
        .add_default_face(Face::Right);
    assert_eq!(cube.piece(coord), Ok(&corner));
    assert_eq!(cube.piece_at_index(8), Ok(&corner));
    assert_eq!(coord.index(3), Ok(8));

    assert_eq!(cube.piece(Coord::new(1, 1, 1)), Ok(&Piece::EMPTY));
    assert_eq!(
        cube.piece(Coord::new(3, 0, 0)),
        Err(IndexOutOfRange::Coord {
            x: 3,
            y: 0,
            z: 0,
            size: 3,
        }),
    );
    assert_eq!(
        cube.piece_at_index(27),
        Err(IndexOutOfRange::Linear { index: 27, size: 3 }),
    );
}

#[test]
fn test_turn_then_reverse() {
    for n in TURNABLE_SIZES {
        let original = messy_cube(n);
        for layer in all_layers(n) {
            for direction in all_directions() {
                let mut cube = Cube::new_solved(n);
                cube.rotate(layer, direction);
                assert!(!cube.is_solved(), "{layer} {direction} on {n}x{n}x{n}");

                let mut cube = original.clone();
                cube.rotate(layer, direction);
                cube.rotate(layer, direction.rev());
                assert_eq!(cube, original, "{layer} {direction} on {n}x{n}x{n}");
            }
        }
    }
}

#[test]
fn test_four_turns_is_identity() {
    for n in TURNABLE_SIZES {
        let original = messy_cube(n);
        for layer in all_layers(n) {
            for direction in all_directions() {
                let mut cube = original.clone();
                for _ in 0..4 {
                    cube.rotate(layer, direction);
                }
                assert_eq!(cube, original, "{layer} {direction} on {n}x{n}x{n}");
            }
        }
    }
}

#[test]
fn test_two_turns_either_way() {
    for n in TURNABLE_SIZES {
        for layer in all_layers(n) {
            let mut clockwise = messy_cube(n);
            let mut counterclockwise = clockwise.clone();
            for _ in 0..2 {
                clockwise.rotate(layer, Direction::Clockwise);
                counterclockwise.rotate(layer, Direction::CounterClockwise);
            }
            assert_eq!(clockwise, counterclockwise, "{layer} on {n}x{n}x{n}");
        }
    }
}

#[test]
fn test_is_solved_has_no_side_effects() {
    for cube in [Cube::new_solved(3), messy_cube(3)] {
        let before = cube.clone();
        let first = cube.is_solved();
        let second = cube.is_solved();
        assert_eq!(first, second);
        assert_eq!(cube, before);
    }
}

/// Each outer turn moves the expected stickers onto the front or top face,
/// on cubes with both even and odd side lengths.
#[test]
fn test_outer_turn_directions() {
    for n in TURNABLE_SIZES {
        let turned = |face: Face| {
            let mut cube = Cube::new_solved(n);
            cube.rotate(face.layer(n), Direction::Clockwise);
            cube
        };
        let all = |color| vec![Some(color); n];

        let cube = turned(Face::Right);
        assert_eq!(column(&cube.face_stickers(Face::Front), n - 1), all(Color::Yellow));
        assert_eq!(column(&cube.face_stickers(Face::Top), n - 1), all(Color::Green));

        let cube = turned(Face::Left);
        assert_eq!(column(&cube.face_stickers(Face::Front), 0), all(Color::White));

        let cube = turned(Face::Top);
        assert_eq!(cube.face_stickers(Face::Front)[0], all(Color::Red));

        let cube = turned(Face::Bottom);
        assert_eq!(cube.face_stickers(Face::Front)[n - 1], all(Color::Orange));

        let cube = turned(Face::Front);
        assert_eq!(cube.face_stickers(Face::Top)[n - 1], all(Color::Orange));

        let cube = turned(Face::Back);
        assert_eq!(cube.face_stickers(Face::Top)[0], all(Color::Red));
    }
}

#[test]
fn test_unsolved_faces() {
    let mut cube = Cube::new_solved(3);
    cube.rotate(Face::Right.layer(3), Direction::Clockwise);
    assert!(!cube.is_solved());
    assert!(cube.is_face_solved(Face::Right));
    assert!(cube.is_face_solved(Face::Left));
    assert_eq!(
        cube.unsolved_faces(),
        vec![Face::Top, Face::Front, Face::Back, Face::Bottom],
    );
}

#[test]
fn test_middle_layer_turn() {
    for n in [3, 5] {
        let mut cube = Cube::new_solved(n);
        let middle = Layer { axis: Axis::X, depth: n / 2 };
        cube.rotate(middle, Direction::Clockwise);
        assert!(cube.is_face_solved(Face::Left));
        assert!(cube.is_face_solved(Face::Right));
        assert!(!cube.is_face_solved(Face::Front));
        assert_stickers_on_boundary(&cube);
        // Same direction as the left face.
        assert_eq!(column(&cube.face_stickers(Face::Front), n / 2), vec![Some(Color::White); n]);
    }
}

#[test]
fn test_single_piece_cube() {
    let mut cube = Cube::new_solved(1);
    assert_eq!(cube.pieces()[0].sticker_count(), 6);
    cube.rotate(Face::Front.layer(1), Direction::Clockwise);
    assert!(!cube.is_solved());
    cube.rotate(Face::Front.layer(1), Direction::CounterClockwise);
    assert!(cube.is_solved());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn test_rotate_out_of_range_layer() {
    let mut cube = Cube::new_solved(3);
    cube.rotate(Layer { axis: Axis::Y, depth: 3 }, Direction::Clockwise);
}

#[test]
fn test_piece_rotation() {
    let corner = Piece::with_color(Face::Top, Color::White)
        .add_color(Face::Front, Color::Green)
        .add_color(Face::Left, Color::Orange);

    let mut piece = corner;
    piece.rotate(Axis::X, Direction::Clockwise);
    assert_eq!(piece[Face::Front], Some(Color::White));
    assert_eq!(piece[Face::Bottom], Some(Color::Green));
    assert_eq!(piece[Face::Left], Some(Color::Orange));
    assert_eq!(piece[Face::Top], None);
    assert_eq!(piece[Face::Back], None);

    piece.rotate(Axis::X, Direction::CounterClockwise);
    assert_eq!(piece, corner);

    for axis in Axis::ALL {
        let mut piece = corner;
        for _ in 0..4 {
            piece.rotate(axis, Direction::Clockwise);
        }
        assert_eq!(piece, corner);
    }

    let mut piece = corner;
    piece.rotate(Axis::Y, Direction::Clockwise);
    assert_eq!(piece[Face::Top], Some(Color::White));
    assert_eq!(piece[Face::Right], Some(Color::Green));
    assert_eq!(piece[Face::Front], Some(Color::Orange));

    let mut piece = corner;
    piece.rotate(Axis::Z, Direction::Clockwise);
    assert_eq!(piece[Face::Front], Some(Color::Green));
    assert_eq!(piece[Face::Right], Some(Color::White));
    assert_eq!(piece[Face::Top], Some(Color::Orange));
}

#[test]
fn test_piece_display() {
    let piece = Piece::with_default_face(Face::Top)
        .add_default_face(Face::Front)
        .add_default_face(Face::Left);
    assert_eq!(piece.to_string(), "  W\nO G - -\n  -");
    assert_eq!(Piece::EMPTY.to_string(), "  -\n- - - -\n  -");
}

fn arbitrary_turn(size: usize) -> impl Strategy<Value = (Layer, Direction)> {
    (0..3_usize, 0..size, any::<bool>()).prop_map(|(axis, depth, clockwise)| {
        let layer = Layer {
            axis: Axis::ALL[axis],
            depth,
        };
        (layer, Direction::from_clockwise(clockwise))
    })
}

fn arbitrary_turn_sequence() -> impl Strategy<Value = (usize, Vec<(Layer, Direction)>)> {
    (1..=6_usize).prop_flat_map(|size| {
        (
            Just(size),
            prop::collection::vec(arbitrary_turn(size), 0..40),
        )
    })
}

proptest! {
    #[test]
    fn proptest_stickers_conserved((size, turns) in arbitrary_turn_sequence()) {
        let mut cube = Cube::new_solved(size);
        let expected = Color::iter()
            .map(|color| (color, size * size))
            .collect::<HashMap<_, _>>();
        prop_assert_eq!(cube.sticker_counts(), expected.clone());
        for (layer, direction) in turns {
            cube.rotate(layer, direction);
        }
        prop_assert_eq!(cube.sticker_counts(), expected);
        assert_stickers_on_boundary(&cube);
    }

    #[test]
    fn proptest_undo_turn_sequence((size, turns) in arbitrary_turn_sequence()) {
        let mut cube = Cube::new_solved(size);
        for &(layer, direction) in &turns {
            cube.rotate(layer, direction);
        }
        for &(layer, direction) in turns.iter().rev() {
            cube.rotate(layer, direction.rev());
        }
        prop_assert!(cube.is_solved());
        prop_assert_eq!(cube, Cube::new_solved(size));
    }
}

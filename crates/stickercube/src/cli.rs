use std::io::Write;

use eyre::{Context, Result};
use rand::SeedableRng;
use stickercube_core::Cube;
use stickercube_notation::{apply_moves, format_moves, random_scramble};

use crate::render::Net;

/// Largest accepted side length.
pub(crate) const MAX_CUBE_SIZE: u16 = 100;
/// Largest accepted number of random moves.
pub(crate) const MAX_SCRAMBLE_LENGTH: usize = 10_000;

/// Scramble an N×N×N cube and print its net
///
/// The scramble is printed first, followed by the top face, the left, front,
/// right, and back faces side by side, and the bottom face.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Side length of the cube, at most 100.
    #[arg(value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_CUBE_SIZE)))]
    pub cube_size: u16,
    /// Number of random moves in the scramble, at most 10000.
    #[arg(value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
        .range(..=MAX_SCRAMBLE_LENGTH as u64))]
    pub scramble_length: usize,

    /// Seed for a reproducible scramble.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Moves to apply instead of a random scramble, such as "R U R' U'".
    #[arg(long, value_name = "NOTATION")]
    pub moves: Option<String>,
    /// Draw stickers in color.
    #[arg(long)]
    pub color: bool,
}

pub(crate) fn exec(args: Args, out: &mut impl Write) -> Result<()> {
    let Args {
        cube_size,
        scramble_length,
        seed,
        moves,
        color,
    } = args;

    let size = usize::from(cube_size);
    log::info!("{size}x{size}x{size} cube");

    let notation = match (moves, seed) {
        (Some(moves), _) => {
            log::info!("applying moves from the command line");
            moves
        }
        (None, Some(seed)) => {
            log::info!("scrambling with seed {seed}");
            let mut rng = rand_chacha::ChaCha12Rng::seed_from_u64(seed);
            format_moves(random_scramble(&mut rng, scramble_length))
        }
        (None, None) => {
            log::info!("scrambling with random seed");
            format_moves(random_scramble(&mut rand::rng(), scramble_length))
        }
    };

    let mut cube = Cube::new_solved(size);
    let skipped = apply_moves(&mut cube, &notation);
    if skipped > 0 {
        log::warn!("skipped {skipped} invalid moves");
    }

    let solved = match cube.is_solved() {
        true => "yes",
        false => "no",
    };
    (|| {
        writeln!(out, "{notation}")?;
        write!(out, "{}", Net::new(&cube).colored(color))?;
        writeln!(out, "Solved: {solved}")
    })()
    .wrap_err("error writing output")
}

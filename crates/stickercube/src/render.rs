use std::fmt;

use owo_colors::OwoColorize;
use stickercube_core::{Color, Cube, Face};

/// Faces drawn side by side in the middle band of the net.
const MIDDLE_FACES: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// Unfolded view of a cube, drawn as text.
///
/// Each sticker is drawn as its color's letter followed by a space. The top
/// and bottom faces are indented to sit above and below the front face.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Net<'a> {
    cube: &'a Cube,
    colored: bool,
}

impl<'a> Net<'a> {
    pub fn new(cube: &'a Cube) -> Self {
        Self {
            cube,
            colored: false,
        }
    }

    /// Sets whether to draw stickers with ANSI colors.
    #[must_use]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, row: &[Option<Color>]) -> fmt::Result {
        for &sticker in row {
            self.write_sticker(f, sticker)?;
            write!(f, " ")?;
        }
        Ok(())
    }

    fn write_sticker(&self, f: &mut fmt::Formatter<'_>, sticker: Option<Color>) -> fmt::Result {
        let letter = Color::letter_or_dash(sticker);
        if !self.colored {
            return write!(f, "{letter}");
        }
        match sticker {
            Some(Color::White) => write!(f, "{}", letter.bright_white()),
            Some(Color::Orange) => write!(f, "{}", letter.truecolor(255, 136, 0)),
            Some(Color::Green) => write!(f, "{}", letter.green()),
            Some(Color::Red) => write!(f, "{}", letter.red()),
            Some(Color::Blue) => write!(f, "{}", letter.blue()),
            Some(Color::Yellow) => write!(f, "{}", letter.yellow()),
            None => write!(f, "{}", letter.dimmed()),
        }
    }
}

impl fmt::Display for Net<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(2 * self.cube.size());

        for row in self.cube.face_stickers(Face::Top) {
            write!(f, "{indent}")?;
            self.write_row(f, &row)?;
            writeln!(f)?;
        }

        let middle = MIDDLE_FACES.map(|face| self.cube.face_stickers(face));
        for ly in 0..self.cube.size() {
            for face_rows in &middle {
                self.write_row(f, &face_rows[ly])?;
            }
            writeln!(f)?;
        }

        for row in self.cube.face_stickers(Face::Bottom) {
            write!(f, "{indent}")?;
            self.write_row(f, &row)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

use strum::{Display, EnumIter};

/// Sticker color.
///
/// A missing sticker is represented as `None` in an `Option<Color>`.
#[derive(Display, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Default color of the top face.
    White,
    /// Default color of the left face.
    Orange,
    /// Default color of the front face.
    Green,
    /// Default color of the right face.
    Red,
    /// Default color of the back face.
    Blue,
    /// Default color of the bottom face.
    Yellow,
}

impl Color {
    /// Returns the single-letter abbreviation for the color.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// Returns the single-letter abbreviation for an optional sticker, using
    /// `-` for a missing sticker.
    pub fn letter_or_dash(color: Option<Color>) -> char {
        color.map_or('-', Color::letter)
    }
}

// Core value types shared by the game, the renderer and the window host.
// Nothing here knows about rules; these are just players, cells, pixels and shapes.

use std::fmt;

/// Who is playing. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X, // red cross
    O, // blue ring
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// One of the nine board positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

/// How the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    /// True once the game has been decided (win or draw).
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The line shown on the result overlay; `None` while still playing.
    pub fn message(self) -> Option<String> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won(p) => Some(format!("Player {p} wins!")),
            Outcome::Draw => Some("It's a draw!".to_string()),
        }
    }
}

/* ---------- Pixel-space geometry ---------- */

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Pack as 0x00RRGGBB, the layout minifb expects.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }
}

/// A pixel position. Signed so shapes may hang off the edge and get clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the window is (pixels)
    pub height: usize,     // how tall the window is (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer of the given size, every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        Self { width, height, pixels: vec![fill.to_u32(); width * height] }
    }

    /// Read back one pixel; `None` outside the buffer.
    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_toggles() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::InProgress.message(), None);
        assert_eq!(Outcome::Won(Player::X).message().as_deref(), Some("Player X wins!"));
        assert_eq!(Outcome::Won(Player::O).message().as_deref(), Some("Player O wins!"));
        assert_eq!(Outcome::Draw.message().as_deref(), Some("It's a draw!"));
    }

    #[test]
    fn rgb_packs_like_minifb() {
        assert_eq!(Rgb(160, 32, 160).to_u32(), 0x00A0_20A0);
        assert_eq!(Rgb::WHITE.to_u32(), 0x00FF_FFFF);
    }
}

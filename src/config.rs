//! Host constants: window size, stroke width, frame rate, palette.
//!
//! Values come from the command line (with defaults matching the classic
//! 300x300 board) and are checked once at startup so the rest of the program
//! can assume a square play area split into three equal cells.

use clap::Parser;

use crate::board::SIZE;
use crate::error::Error;
use crate::font;
use crate::render::REPLAY_PROMPT;
use crate::types::Rgb;

pub const DEFAULT_SIDE: u32 = 300;
pub const MIN_SIDE: u32 = 30;
pub const MAX_SIDE: u32 = 4096;
pub const DEFAULT_LINE_WIDTH: u32 = 15;
pub const DEFAULT_FPS: u32 = 10;
pub const DEFAULT_TEXT_SCALE: u32 = 2;

/// Colors for every kind of thing that gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub x_mark: Rgb,
    pub o_mark: Rgb,
    pub overlay: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            grid: Rgb::BLACK,
            x_mark: Rgb(255, 0, 0),
            o_mark: Rgb(0, 0, 255),
            overlay: Rgb(160, 32, 160),
            text: Rgb::WHITE,
        }
    }
}

/// Tic-tac-toe in a window. Click a cell to play; R restarts a finished game; Esc quits.
#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Side length of the square play area in pixels (multiple of 3)
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    pub size: u32,

    /// Thickness of grid lines and marks in pixels
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: u32,

    /// Frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Pixel scale for the 5x7 overlay font
    #[arg(long, default_value_t = DEFAULT_TEXT_SCALE)]
    pub text_scale: u32,
}

/// Validated host constants.
///
/// Only [`Config::new`] (or the default) builds one, so every geometry value
/// here fits comfortably in `i32` pixel math and the replay prompt fits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    side: i32,
    line_width: i32,
    fps: u32,
    text_scale: i32,
    palette: Palette,
}

impl Config {
    /// Check the values and build a config with the default palette.
    pub fn new(side: u32, line_width: u32, fps: u32, text_scale: u32) -> Result<Self, Error> {
        let invalid = |reason: String| Err(Error::InvalidConfig { reason });
        let cells = SIZE as u32;

        if !(MIN_SIDE..=MAX_SIDE).contains(&side) || side % cells != 0 {
            return invalid(format!("size {side} must be a multiple of {cells} between {MIN_SIDE} and {MAX_SIDE}"));
        }
        let cell = side / cells;
        // Strokes narrower than a third of a cell; checked so huge widths can't overflow.
        if line_width == 0 || line_width.checked_mul(3).is_none_or(|w| w >= cell) {
            return invalid(format!("line width {line_width} must be between 1 and a third of a cell ({cell}px)"));
        }
        if fps == 0 {
            return invalid("fps must be at least 1".to_string());
        }
        let prompt_w = font::text_size(REPLAY_PROMPT, 1).0.unsigned_abs();
        if text_scale == 0 || text_scale > side / prompt_w {
            return invalid(format!(
                "text scale {text_scale} must be at least 1 and keep the replay prompt inside {side}px (max {})",
                side / prompt_w
            ));
        }

        Ok(Self {
            side: to_px("size", side)?,
            line_width: to_px("line width", line_width)?,
            fps,
            text_scale: to_px("text scale", text_scale)?,
            palette: Palette::default(),
        })
    }

    /// Side length of the square play area in pixels.
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Pixel size of one cell.
    pub fn cell_size(&self) -> i32 {
        self.side / SIZE as i32
    }

    pub fn line_width(&self) -> i32 {
        self.line_width
    }

    pub fn text_scale(&self) -> i32 {
        self.text_scale
    }

    pub fn fps(&self) -> usize {
        self.fps as usize
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Window width/height for minifb.
    pub fn window_size(&self) -> usize {
        self.side.unsigned_abs() as usize
    }
}

// Bounds are already checked; try_from keeps the conversion lossless.
fn to_px(name: &str, value: u32) -> Result<i32, Error> {
    i32::try_from(value).map_err(|_| Error::InvalidConfig { reason: format!("{name} {value} is too large") })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE as i32,
            line_width: DEFAULT_LINE_WIDTH as i32,
            fps: DEFAULT_FPS,
            text_scale: DEFAULT_TEXT_SCALE as i32,
            palette: Palette::default(),
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = Error;

    fn try_from(cli: &Cli) -> Result<Self, Error> {
        Config::new(cli.size, cli.line_width, cli.fps, cli.text_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(result: Result<Config, Error>) -> bool {
        matches!(result, Err(Error::InvalidConfig { .. }))
    }

    #[test]
    fn defaults_are_valid() {
        let cli = Cli::parse_from(["tic-tac-toe"]);
        let config = Config::try_from(&cli).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cell_size(), 100);
        assert_eq!(config.window_size(), 300);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["tic-tac-toe", "--size", "600", "--line-width", "8", "--fps", "30"]);
        let config = Config::try_from(&cli).unwrap();
        assert_eq!(config.side(), 600);
        assert_eq!(config.line_width(), 8);
        assert_eq!(config.fps(), 30);
        assert_eq!(config.cell_size(), 200);
    }

    #[test]
    fn size_must_split_into_three() {
        assert!(rejected(Config::new(301, 15, 10, 2)));
        assert!(rejected(Config::new(27, 1, 10, 2)));
    }

    #[test]
    fn size_has_an_upper_bound() {
        assert!(rejected(Config::new(MAX_SIDE + 2, 15, 10, 2)));
        assert!(rejected(Config::new(u32::MAX, 15, 10, 2)));
        assert!(rejected(Config::new(3_000_000_000, 15, 10, 2)));
        assert!(Config::new(4095, 15, 10, 2).is_ok());
    }

    #[test]
    fn huge_line_width_is_rejected_not_overflowed() {
        assert!(rejected(Config::new(300, 2_000_000_000, 10, 2)));
        assert!(rejected(Config::new(300, u32::MAX, 10, 2)));
    }

    #[test]
    fn text_scale_must_keep_prompt_on_board() {
        // "Press 'r' to play again" is 138px wide at scale 1.
        assert!(rejected(Config::new(300, 15, 10, 100_000_000)));
        assert!(rejected(Config::new(300, 15, 10, 3)));
        assert!(Config::new(300, 15, 10, 2).is_ok());
        assert!(rejected(Config::new(99, 5, 10, 1)));
    }

    #[test]
    fn rejects_degenerate_values() {
        assert!(rejected(Config::new(300, 0, 10, 2)));
        assert!(rejected(Config::new(300, 34, 10, 2)));
        assert!(rejected(Config::new(300, 15, 0, 2)));
        assert!(rejected(Config::new(300, 15, 10, 0)));
        assert!(Config::new(300, 33, 10, 1).is_ok());
    }
}

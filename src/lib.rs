//! Tic-tac-toe for two players sharing one mouse.
//!
//! The game itself is plain data and pure functions; the window is a thin
//! host around it. Each frame the host:
//!
//! 1. polls the window for [`input::InputEvent`]s,
//! 2. feeds them through an [`input::InputMapper`] into the [`session::GameSession`],
//! 3. asks the [`render::Renderer`] for that frame's [`render::DrawCommand`]s,
//! 4. paints them with [`draw::rasterize`] and presents the pixels.
//!
//! ## Modules
//!
//! - [`board`] - the 3x3 grid and mark placement
//! - [`rules`] - win and draw detection
//! - [`session`] - turns, outcome and restart
//! - [`input`] - pixel/key events to game actions
//! - [`render`] - session to draw commands
//! - [`draw`] - minifb window and software rasterizer
//! - [`font`] - 5x7 bitmap font and text metrics
//! - [`config`] - command-line host constants
//!
//! ## Example
//!
//! ```
//! use tic_tac_toe::session::GameSession;
//! use tic_tac_toe::types::{Outcome, Player};
//!
//! let mut game = GameSession::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.submit_move(row, col);
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Player::X));
//! ```

pub mod board;
pub mod config;
pub mod draw;
pub mod error;
pub mod font;
pub mod input;
pub mod render;
pub mod rules;
pub mod session;
pub mod types;

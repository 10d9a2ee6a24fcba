//! Turns raw window events into game actions.
//!
//! The mapper keeps only the play-area geometry; all game state stays in the
//! [`GameSession`] passed to [`InputMapper::dispatch`].

use tracing::debug;

use crate::board::SIZE;
use crate::config::Config;
use crate::session::GameSession;

/// Keys the game cares about. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Replay,
    Quit,
    Other,
}

/// Events the host feeds in, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Left button went down at window pixel (x, y).
    PointerDown { x: i32, y: i32 },
    KeyPress(Key),
    /// Start of a new frame; carries no action.
    FrameTick,
}

/// Whether the host should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputMapper {
    side: i32,
    cell_size: i32,
}

impl InputMapper {
    pub fn new(config: &Config) -> Self {
        Self { side: config.side(), cell_size: config.cell_size() }
    }

    /// Board cell under pixel (x, y), or `None` outside the play area.
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x >= self.side || y >= self.side {
            return None;
        }
        let (row, col) = ((y / self.cell_size) as usize, (x / self.cell_size) as usize);
        // Config keeps side a multiple of 3, so this only trips for a hand-built mapper.
        (row < SIZE && col < SIZE).then_some((row, col))
    }

    /// Apply one event to the session.
    pub fn dispatch(&self, session: &mut GameSession, event: InputEvent) -> Flow {
        match event {
            InputEvent::PointerDown { x, y } => {
                if session.is_over() {
                    return Flow::Continue;
                }
                match self.cell_at_pixel(x, y) {
                    Some((row, col)) => {
                        session.submit_move(row, col);
                    }
                    None => debug!(x, y, "click outside play area"),
                }
                Flow::Continue
            }
            InputEvent::KeyPress(Key::Replay) => {
                if session.is_over() {
                    session.reset();
                }
                Flow::Continue
            }
            InputEvent::KeyPress(Key::Quit) => Flow::Quit,
            InputEvent::KeyPress(Key::Other) | InputEvent::FrameTick => Flow::Continue,
        }
    }

    /// Apply events in order, stopping at the first quit.
    pub fn dispatch_all<I>(&self, session: &mut GameSession, events: I) -> Flow
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.dispatch(session, event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }
}

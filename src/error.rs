// One error type for the whole program.
// Every variant states *where* things went wrong.

use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// A board coordinate outside 0..=2.
    #[display("Cell ({row}, {col}) is off the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    /// Host constants that cannot produce a clean 3x3 play area.
    #[display("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Creating the window failed.
    #[display("Window init error: {reason}")]
    WindowInit { reason: String },

    /// Pushing a frame to the window failed.
    #[display("Window update error: {reason}")]
    WindowUpdate { reason: String },
}

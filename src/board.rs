//! The 3x3 grid of cells.
//!
//! The board is the only place cell state lives. It changes through exactly
//! two doors: [`Board::place`] (one empty cell gets a mark) and
//! [`Board::reset`] (everything goes back to empty).

use std::fmt;

use crate::error::Error;
use crate::types::{Cell, Player};

/// Rows and columns per side.
pub const SIZE: usize = 3;

/// What happened when a mark was offered to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The cell was empty and now holds the mark.
    Accepted,
    /// The cell was taken (or off the board); nothing changed.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE], // row-major: cells[row][col]
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one cell.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, Error> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(Error::OutOfRange { row, col })
    }

    /// Put `player`'s mark on an empty cell.
    ///
    /// Occupied cells and off-board coordinates are rejected without touching
    /// the board; a rejection is an ordinary result, not an error.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Placement {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Occupied(player);
                Placement::Accepted
            }
            _ => Placement::Rejected,
        }
    }

    /// True when no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Number of marks on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Every mark on the board as `(row, col, player)`, row-major.
    pub fn marks(&self) -> impl Iterator<Item = (usize, usize, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.player().map(|p| (row, col, p)))
        })
    }

    // Unchecked read for callers that already iterate 0..SIZE.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }
}

// X|O|.
// -+-+-
// ...
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                };
                write!(f, "{ch}")?;
                if c + 1 < SIZE {
                    write!(f, "|")?;
                }
            }
            if r + 1 < SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

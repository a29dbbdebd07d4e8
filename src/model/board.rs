//! Board and mark types.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of cells on a 3x3 board.
pub const CELL_COUNT: usize = 9;

/// The 8 winning triples, scanned in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Mark {
    /// The mark played from the keyboard and pointer.
    pub const HUMAN: Mark = Mark::X;
    /// The mark played by the random opponent.
    pub const COMPUTER: Mark = Mark::O;

    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn is_computer(self) -> bool {
        self == Mark::COMPUTER
    }
}

/// Row-major 3x3 grid; index = row * 3 + col.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Mark at `index`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Writes `mark` into an empty in-range cell. Returns false and leaves
    /// the board untouched otherwise.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell @ None) => {
                *cell = Some(mark);
                true
            }
            _ => false,
        }
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.is_none().then_some(i))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Mark on the first completed line in [`WINNING_LINES`] order.
    pub fn winner(&self) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(m) if self.cells[b] == Some(m) && self.cells[c] == Some(m) => Some(m),
            _ => None,
        })
    }
}

//! Board module - manages the game grid
//!
//! The board is a fixed NxN grid (4x4 in play) of [`Cell`]s stored inline, so a
//! board never allocates. Coordinates are `(row, col)`: row 0 is the top edge,
//! col 0 the left edge. No game rules live here; moves and spawns are in
//! [`crate::moves`] and [`crate::spawn`].

use crate::cell::{clamp_exponent, tile_value, Cell};
use crate::types::{Direction, Position};

/// The game board - N rows x N columns
#[derive(Debug, Clone, PartialEq)]
pub struct Board<const N: usize> {
    /// Row-major grid, `cells[row][col]`
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::EMPTY; N]; N],
        }
    }

    /// Build a board from raw exponents, all tiles settled
    ///
    /// Exponents above [`MAX_EXPONENT`] are clamped to it.
    ///
    /// [`MAX_EXPONENT`]: crate::types::MAX_EXPONENT
    pub fn from_exponents(exponents: [[Option<u8>; N]; N]) -> Self {
        let mut board = Self::new();
        for (row, line) in exponents.iter().enumerate() {
            for (col, &exp) in line.iter().enumerate() {
                board.cells[row][col].exponent = exp.map(clamp_exponent);
            }
        }
        board
    }

    /// Raw exponents, row-major
    pub fn exponents(&self) -> [[Option<u8>; N]; N] {
        let mut out = [[None; N]; N];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                out[row][col] = cell.exponent;
            }
        }
        out
    }

    /// Side length of the board
    pub fn dimension(&self) -> usize {
        N
    }

    /// Get cell at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|line| line.get(col))
    }

    /// Mutable cell at `(row, col)`
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row).and_then(|line| line.get_mut(col))
    }

    /// Get the exponent at `(row, col)`
    /// Outer None means out of bounds, inner None means empty
    pub fn get_exponent(&self, row: usize, col: usize) -> Option<Option<u8>> {
        self.get(row, col).map(|cell| cell.exponent)
    }

    /// Set the exponent at `(row, col)`, settling the cell's animation
    /// Returns false if out of bounds; exponents above `MAX_EXPONENT` are clamped
    pub fn set_exponent(&mut self, row: usize, col: usize, exponent: Option<u8>) -> bool {
        match self.get_mut(row, col) {
            Some(cell) => {
                *cell = Cell {
                    exponent: exponent.map(clamp_exponent),
                    anim: Default::default(),
                };
                true
            }
            None => false,
        }
    }

    /// Check if `(row, col)` is in bounds and empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(cell) if cell.is_empty())
    }

    /// No empty cell left
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Sum of displayed values over all tiles
    pub fn value_sum(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .filter_map(|cell| cell.exponent)
            .map(tile_value)
            .fold(0u64, u64::saturating_add)
    }

    /// All coordinates in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..N).flat_map(|row| (0..N).map(move |col| Position::new(row, col)))
    }

    /// Empty coordinates in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(move |p| self.cells[p.row][p.col].is_empty())
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// The `index`-th lane for a move toward `direction`, ordered from the
    /// cell on the leading edge to the farthest one.
    ///
    /// Lanes are columns for vertical moves (index = column) and rows for
    /// horizontal moves (index = row).
    pub fn lane(direction: Direction, index: usize) -> [Position; N] {
        let mut lane = [Position::default(); N];
        for (k, slot) in lane.iter_mut().enumerate() {
            let far = N - 1 - k;
            *slot = match direction {
                Direction::Down => Position::new(far, index),
                Direction::Up => Position::new(k, index),
                Direction::Left => Position::new(index, k),
                Direction::Right => Position::new(index, far),
            };
        }
        lane
    }

    /// Advance every cell's animation clock by one frame
    pub fn advance_animations(&mut self, delta_secs: f32, rate: f32) {
        for cell in self.cells.iter_mut().flatten() {
            cell.anim.advance(delta_secs, rate);
        }
    }

    /// True when no cell is mid-animation
    pub fn is_settled(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.anim.is_settled())
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = Cell::EMPTY;
        }
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

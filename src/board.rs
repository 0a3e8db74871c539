//! Playfield grid, merging and line clearing

use crate::piece::Piece;
use crate::tetromino::Color;
use serde::{Deserialize, Serialize};

/// Playfield dimensions
pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 20;

/// A cell on the board - either empty or filled with a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// The playfield
///
/// Grid stored as [row][col], row 0 at the top; gravity increases the
/// row index. Dimensions are fixed for the life of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID_WIDTH]; GRID_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    /// Get the cell at (row, col), or None outside the grid
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= GRID_HEIGHT || col >= GRID_WIDTH {
            return None;
        }
        Some(self.cells[row][col])
    }

    /// Set the cell at (row, col). Returns false outside the grid.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= GRID_HEIGHT || col >= GRID_WIDTH {
            return false;
        }
        self.cells[row][col] = cell;
        true
    }

    /// Commit a piece's occupied cells into the grid.
    ///
    /// The caller must have verified the piece does not collide;
    /// already-filled cells are overwritten silently. Cells above the
    /// top row are skipped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.occupied_cells() {
            self.set(y, x, Cell::Filled(piece.color));
        }
    }

    /// Remove every full row at once, slide the survivors down without
    /// reordering them, and refill the top with empty rows. Returns how
    /// many rows were removed.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_row = GRID_HEIGHT;

        for read_row in (0..GRID_HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    self.cells[write_row] = self.cells[read_row];
                }
            }
        }

        for row in 0..write_row {
            self.cells[row] = [Cell::Empty; GRID_WIDTH];
        }

        cleared
    }

    /// A row with no empty cells is full and eligible for clearing
    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(Cell::is_filled)
    }

    /// Whether every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(Cell::is_empty))
    }
}

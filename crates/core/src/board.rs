//! Board module - manages the game grid
//!
//! The board is a `cols` x `rows` grid where each cell is empty (`0`) or holds
//! the shape-type id of the piece that filled it. Uses a flat array for cache
//! locality. Coordinates: (x, y) where x ranges 0..cols (left to right), y
//! ranges 0..rows (top to bottom).
//!
//! Stamping a piece never mutates the board it was called on: [`Board::overlay`]
//! and [`Board::lock`] both return a new board, so a board handed out to a
//! renderer keeps its value.

use crate::shape::Piece;
use crate::types::{Cell, EMPTY_CELL};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cols: usize,
    rows: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![EMPTY_CELL; rows * cols],
        }
    }

    /// Create from rows of cells. Returns `None` for ragged or empty input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let height = rows.len();
        Some(Self {
            cols,
            rows: height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    /// Get width of the board
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get height of the board
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(cell) if cell != EMPTY_CELL)
    }

    /// Whether a piece cell may not sit at (x, y).
    ///
    /// Cells left of 0, right of the last column, or at/below `rows` are
    /// blocked, as are filled cells. Rows above the top (y < 0) are spawn
    /// overhang and never blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.cols || (y >= 0 && y as usize >= self.rows) {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.cols..(y + 1) * self.cols]
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Whether every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY_CELL)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to rows of cells (for display and tests)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(<[Cell]>::to_vec).collect()
    }

    /// New board with the piece's cells stamped in, for display only.
    pub fn overlay(&self, piece: &Piece) -> Board {
        let mut out = self.clone();
        out.stamp(piece);
        out
    }

    /// New board with the piece committed into it.
    pub fn lock(&self, piece: &Piece) -> Board {
        let mut out = self.clone();
        let written = out.stamp(piece);
        log::debug!(
            "locked piece kind={} at ({}, {}) cells={}",
            piece.kind,
            piece.x,
            piece.y,
            written
        );
        out
    }

    /// Write the piece's kind into every in-bounds cell it covers.
    ///
    /// Cells above the top row or outside the grid are skipped silently.
    fn stamp(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, piece.cell()) {
                written += 1;
            }
        }
        written
    }
}

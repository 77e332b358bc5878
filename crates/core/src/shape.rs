//! Shape module - square occupancy matrices, prototypes and live pieces
//!
//! A [`Shape`] is an N×N bounding box of filled/empty cells stored as a flat,
//! row-major array. Coordinates inside a shape are `(row, col)`; a [`Piece`]
//! places its shape's top-left corner at board position `(x, y)`.

use crate::types::{Cell, ShapeId};

/// N×N occupancy matrix of a shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<bool>,
}

impl Shape {
    /// Create an empty N×N shape
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` unless the rows form a square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0], &[0, 0, 0]]).unwrap();
    /// assert_eq!(t.size(), 3);
    /// assert_eq!(t.count(), 4);
    /// assert!(Shape::from_rows(&[&[1, 1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| v != 0))
            .collect();
        Some(Self { size, cells })
    }

    /// Edge length of the bounding box
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether cell `(row, col)` is filled; out-of-range cells are empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col]
    }

    /// Set cell `(row, col)`. Returns false if out of range.
    pub fn set(&mut self, row: usize, col: usize, filled: bool) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.cells[row * self.size + col] = filled;
        true
    }

    /// Number of filled cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate filled cells as `(row, col)` pairs, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Convert to rows of 0/1 values (for display and tests)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| u8::from(self.get(r, c))).collect())
            .collect()
    }
}

/// Immutable template shape assigned to a session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceProto {
    pub kind: ShapeId,
    pub shape: Shape,
}

impl PieceProto {
    pub fn new(kind: ShapeId, shape: Shape) -> Self {
        Self { kind, shape }
    }
}

/// Live piece: a (possibly rotated) shape placed on the board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub kind: ShapeId,
}

impl Piece {
    /// Create a piece from a prototype at the spawn position for `cols`.
    pub fn spawn(proto: &PieceProto, cols: usize) -> Self {
        Self {
            shape: proto.shape.clone(),
            x: spawn_x(cols, proto.shape.size()),
            y: 0,
            kind: proto.kind,
        }
    }

    /// Same piece moved back to the spawn column and the top row.
    pub fn respawned(self, cols: usize) -> Self {
        Self {
            x: spawn_x(cols, self.shape.size()),
            y: 0,
            ..self
        }
    }

    /// Same piece translated by `(dx, dy)`.
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Board coordinates `(x, y)` of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled()
            .map(move |(r, c)| (self.x + c as i32, self.y + r as i32))
    }

    /// Value stamped into board cells for this piece
    pub fn cell(&self) -> Cell {
        self.kind
    }
}

/// Horizontal spawn column: `⌊cols/2⌋ − ⌊size/2⌋`.
pub fn spawn_x(cols: usize, size: usize) -> i32 {
    (cols / 2) as i32 - (size / 2) as i32
}

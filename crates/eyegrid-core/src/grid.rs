use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Fixed dimensions of an expression grid (data cells only, no headers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    /// 7 intensity levels by 7 emotion categories
    pub const REFERENCE: GridShape = GridShape { rows: 7, cols: 7 };

    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidShape(format!(
                "{}x{} has an empty axis",
                rows, cols
            )));
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Top-left cell, where every session starts
    pub fn origin(&self) -> Cursor {
        Cursor { row: 0, col: 0 }
    }

    /// Build a cursor, rejecting positions outside the grid
    pub fn cursor(&self, row: usize, col: usize) -> Result<Cursor> {
        if !self.contains(row, col) {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Cursor { row, col })
    }

    /// Every cell in raster order (left-to-right, then top-to-bottom)
    pub fn cursors(&self) -> impl Iterator<Item = Cursor> + use<> {
        let cols = self.cols;
        (0..self.cell_count()).map(move |i| Cursor {
            row: i / cols,
            col: i % cols,
        })
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Selected (row, col) position. Only obtainable in range for some `GridShape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub(crate) fn left(self, shape: GridShape) -> Self {
        let col = if self.col == 0 {
            shape.cols - 1
        } else {
            self.col - 1
        };
        Self { col, ..self }
    }

    pub(crate) fn right(self, shape: GridShape) -> Self {
        Self {
            col: (self.col + 1) % shape.cols,
            ..self
        }
    }

    pub(crate) fn up(self, shape: GridShape) -> Self {
        let row = if self.row == 0 {
            shape.rows - 1
        } else {
            self.row - 1
        };
        Self { row, ..self }
    }

    pub(crate) fn down(self, shape: GridShape) -> Self {
        Self {
            row: (self.row + 1) % shape.rows,
            ..self
        }
    }

    /// Next cell in raster order, wrapping from the last cell to the first
    pub(crate) fn raster_next(self, shape: GridShape) -> Self {
        let col = self.col + 1;
        if col == shape.cols {
            Self {
                row: (self.row + 1) % shape.rows,
                col: 0,
            }
        } else {
            Self { col, ..self }
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

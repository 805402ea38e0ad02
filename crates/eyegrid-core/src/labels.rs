use crate::grid::{Cursor, GridShape};
use crate::{Error, Result};
use serde::Serialize;
use std::io;
use std::path::Path;

/// Header-framed label grid of (rows + 1) x (cols + 1) cells.
///
/// Row 0 holds the emotion (column) headers, column 0 holds the intensity
/// (row) headers, and cell `[r + 1][c + 1]` labels grid position `(r, c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    shape: GridShape,
    cells: Vec<Vec<String>>,
}

/// Resolved labels for one grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelEntry<'a> {
    /// Row header
    pub intensity: &'a str,
    /// Column header
    pub emotion: &'a str,
    /// Data cell
    pub label: &'a str,
}

impl LabelTable {
    /// Build a table from in-memory rows, enforcing the header-framed shape.
    pub fn from_rows(cells: Vec<Vec<String>>, shape: GridShape) -> Result<Self> {
        let expected_rows = shape.rows() + 1;
        let expected_cols = shape.cols() + 1;

        let mismatch = |bad_row| Error::ShapeMismatch {
            expected_rows,
            expected_cols,
            found_rows: cells.len(),
            bad_row,
        };

        if cells.len() != expected_rows {
            return Err(mismatch(None));
        }
        if let Some((index, row)) = cells
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected_cols)
        {
            return Err(mismatch(Some((index, row.len()))));
        }

        Ok(Self { shape, cells })
    }

    /// Tokenize delimiter-separated text. Quote characters are literal; a
    /// cell cannot contain the delimiter.
    pub fn from_reader<R: io::Read>(reader: R, delimiter: u8, shape: GridShape) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut cells = Vec::new();
        for record in rdr.records() {
            let record = record?;
            cells.push(record.iter().map(str::to_string).collect());
        }

        Self::from_rows(cells, shape)
    }

    pub fn parse(text: &str, delimiter: u8, shape: GridShape) -> Result<Self> {
        Self::from_reader(text.as_bytes(), delimiter, shape)
    }

    pub fn open(path: &Path, delimiter: u8, shape: GridShape) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(io::BufReader::new(file), delimiter, shape)?;
        tracing::info!(path = %path.display(), shape = %shape, "loaded label table");
        Ok(table)
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Labels for a cursor produced by navigation over this table's shape.
    ///
    /// # Panics
    ///
    /// Panics if the cursor lies outside the table; navigation never yields
    /// such a cursor for a matching shape.
    pub fn lookup(&self, cursor: Cursor) -> LabelEntry<'_> {
        assert!(
            self.shape.contains(cursor.row(), cursor.col()),
            "cursor {} outside {} label table",
            cursor,
            self.shape
        );
        self.entry(cursor.row(), cursor.col())
    }

    /// Checked lookup by raw indices
    pub fn get(&self, row: usize, col: usize) -> Result<LabelEntry<'_>> {
        let cursor = self.shape.cursor(row, col)?;
        Ok(self.entry(cursor.row(), cursor.col()))
    }

    /// Top-left header cell
    pub fn corner(&self) -> &str {
        &self.cells[0][0]
    }

    pub fn col_headers(&self) -> &[String] {
        &self.cells[0][1..]
    }

    pub fn row_headers(&self) -> impl Iterator<Item = &str> {
        self.cells[1..].iter().map(|row| row[0].as_str())
    }

    /// Data cells of one grid row, without its header
    pub fn data_row(&self, row: usize) -> &[String] {
        &self.cells[row + 1][1..]
    }

    /// All cells including headers, as loaded
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    fn entry(&self, row: usize, col: usize) -> LabelEntry<'_> {
        LabelEntry {
            intensity: &self.cells[row + 1][0],
            emotion: &self.cells[0][col + 1],
            label: &self.cells[row + 1][col + 1],
        }
    }
}

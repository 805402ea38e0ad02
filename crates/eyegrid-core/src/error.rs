use std::fmt;

/// Result type for eyegrid-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or indexing grid data
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Atlas image could not be decoded
    Image(image::ImageError),

    /// Label table could not be tokenized
    Csv(csv::Error),

    /// Label table dimensions do not match the grid
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        /// First offending row and its cell count, when the row count matched
        bad_row: Option<(usize, usize)>,
    },

    /// Grid index outside of the configured shape
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Atlas bitmap is smaller than the grid in at least one axis
    AtlasTooSmall {
        width: u32,
        height: u32,
        rows: usize,
        cols: usize,
    },

    /// Grid shape with a zero dimension
    InvalidShape(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Image(err) => write!(f, "Image error: {}", err),
            Error::Csv(err) => write!(f, "Label table error: {}", err),
            Error::ShapeMismatch {
                expected_rows,
                expected_cols,
                found_rows,
                bad_row,
            } => match bad_row {
                Some((index, cells)) => write!(
                    f,
                    "Label table shape mismatch: row {} has {} cells, expected {}",
                    index, cells, expected_cols
                ),
                None => write!(
                    f,
                    "Label table shape mismatch: found {} rows, expected {}x{} (with headers)",
                    found_rows, expected_rows, expected_cols
                ),
            },
            Error::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Index ({}, {}) out of range for {}x{} grid",
                row, col, rows, cols
            ),
            Error::AtlasTooSmall {
                width,
                height,
                rows,
                cols,
            } => write!(
                f,
                "Atlas {}x{} is too small for a {}x{} grid",
                width, height, rows, cols
            ),
            Error::InvalidShape(msg) => write!(f, "Invalid grid shape: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Image(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::ShapeMismatch { .. }
            | Error::IndexOutOfRange { .. }
            | Error::AtlasTooSmall { .. }
            | Error::InvalidShape(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

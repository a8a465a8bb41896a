use std::fmt;

/// Errors raised while building an automaton or loading its initial grid
#[derive(Debug)]
pub enum AntError {
    /// IO operation failed
    IoError(std::io::Error),
    /// Grid has no rows
    EmptyGrid,
    /// First row has no cells
    EmptyRow,
    /// A row's length differs from the first row's
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Start position did not have exactly two components
    InvalidStartPosition(usize),
    /// Invalid direction string
    InvalidDirection(String),
    /// Unknown glyph in a pattern file
    InvalidCell {
        line: usize,
        column: usize,
        glyph: char,
    },
}

impl fmt::Display for AntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntError::IoError(err) => write!(f, "IO error: {}", err),
            AntError::EmptyGrid => write!(f, "grid must contain at least one row"),
            AntError::EmptyRow => write!(f, "grid rows must contain at least one cell"),
            AntError::RaggedRow { row, expected, found } => write!(
                f,
                "grid rows must have equal length: row {} has {} cells, expected {}",
                row, found, expected
            ),
            AntError::InvalidStartPosition(len) => write!(
                f,
                "start position must contain 2 integers, got {}",
                len
            ),
            AntError::InvalidDirection(dir) => write!(f, "Invalid direction: {}", dir),
            AntError::InvalidCell { line, column, glyph } => write!(
                f,
                "Invalid cell {:?} at line {}, column {}",
                glyph, line, column
            ),
        }
    }
}

impl std::error::Error for AntError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AntError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AntError {
    fn from(err: std::io::Error) -> Self {
        AntError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, AntError>;

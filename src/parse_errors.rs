//! Errors that may be encountered when reading a grid from text.

/// A structure representing an error caused when parsing the givens
/// table format.
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum GivensParseError {
    /// A row with other than 9 entries. Carries the row index (0..=8)
    /// and the number of entries found.
    #[error("row {row} contains {found} entries instead of 9")]
    WrongEntryCount {
        /// Row index from 0..=8, topmost row is 0.
        row: u8,
        /// Number of whitespace-separated entries in that row.
        found: usize,
    },
    /// An entry that is not an integer in `0..=9`.
    #[error("row {row} contains invalid entry '{token}'")]
    InvalidEntry {
        /// Row index from 0..=8, topmost row is 0.
        row: u8,
        /// The offending token.
        token: String,
    },
    /// Input ends with less than 9 non-blank rows. Carries the number of
    /// rows encountered.
    #[error("input ends after {0} rows instead of 9")]
    NotEnoughRows(u8),
    /// More than 9 non-blank rows are supplied.
    #[error("input contains more than 9 rows")]
    TooManyRows,
}

/// A structure representing an error caused when parsing the
/// 81-character line format.
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are numbers 1..=9 and '0', '.' or '_' for empty
    /// cells.
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell number from 0..=80, 0..=8 for the first row, 9..=17 for
        /// the second and so on.
        cell: u8,
        /// The parsed invalid char.
        ch: char,
    },
    /// Less than 81 cells are supplied. Carries the number of cells
    /// found.
    #[error("line contains {0} cells instead of 81")]
    NotEnoughCells(u8),
    /// More than 81 cells are supplied.
    #[error("line contains more than 81 cells")]
    TooManyCells,
}

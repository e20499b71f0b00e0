//! Errors for grid construction and solving.
//!
//! Parse errors live in [`parse_errors`](crate::parse_errors); everything
//! here concerns grids that are already well-formed.

use crate::board::{Cell, Digit};

#[cfg(doc)]
use crate::Grid;

/// Error for [`Grid::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Grid::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}

/// A given that repeats a digit within one of its units.
///
/// Detected while the availability masks are built from the givens,
/// before any search runs. A puzzle that contradicts itself is invalid
/// input, not merely unsolvable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error(
    "given {} in cell {} repeats a digit within its row, column or block",
    .digit.get(),
    .cell.get()
)]
pub struct Conflict {
    /// The later of the two clashing cells, in row-major order.
    pub cell: Cell,
    /// The repeated digit.
    pub digit: Digit,
}

/// The search exhausted every branch without completing the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no assignment of the empty cells satisfies every unit constraint")]
pub struct Unsolvable;

/// Error for [`Grid::solve`]: either kind of solve failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SolveError {
    /// The givens already repeat a digit within a unit.
    #[error(transparent)]
    Conflict(#[from] Conflict),
    /// No completion of the givens exists.
    #[error(transparent)]
    Unsolvable(#[from] Unsolvable),
}

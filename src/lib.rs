#![warn(missing_docs)]
//! A bitmask sudoku constraint solver.
//!
//! ## Overview
//!
//! The whole constraint state of a board lives in 27 availability masks,
//! one 9-bit [`DigitSet`] per row, column and block. A digit is placeable
//! in a cell iff its bit is set in all three masks the cell belongs to, so
//! candidate computation is two ANDs and placing or retracting a digit is
//! three bit operations. On top of that sits a backtracking search that
//! always branches on the most constrained cell.
//!
//! ## Example
//!
//! ```
//! use maskdoku::Grid;
//!
//! let givens = "
//! 0 0 3 0 2 0 6 0 0
//! 9 0 0 3 0 5 0 0 1
//! 0 0 1 8 0 6 4 0 0
//! 0 0 8 1 0 2 9 0 0
//! 7 0 0 0 0 0 0 0 8
//! 0 0 6 7 0 8 2 0 0
//! 0 0 2 6 0 9 5 0 0
//! 8 0 0 2 0 3 0 0 9
//! 0 0 5 0 1 0 3 0 0";
//!
//! // Grids can be created from the table format above, from the
//! // 81 character line format or directly from bytes.
//! let grid = Grid::from_givens(givens)?;
//!
//! let solution = grid.solve()?;
//! assert!(solution.is_solved());
//! println!("{}", solution);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Reusing the pieces behind [`Grid::solve`] gives access to the masks
//! and to search statistics:
//!
//! ```
//! use maskdoku::{Grid, Row, Solver};
//!
//! let grid = Grid::EMPTY;
//! let mut solver = Solver::from_grid(&grid)?;
//! assert_eq!(solver.state().unit_mask(Row::new(0)).bits(), 0b1_1111_1111);
//!
//! let solution = solver.solve()?;
//! assert!(solution.is_solved());
//! println!("solved in {} search nodes", solver.stats().nodes);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bitset;
mod board;
mod consts;
mod errors;
mod helper;
pub mod parse_errors;
mod solver;
mod state;

pub use crate::bitset::{DigitSet, Empty};
pub use crate::board::{Block, Cell, Col, Digit, Grid, Row, Unit};
pub use crate::errors::{
    Conflict, FromBytesError, FromBytesSliceError, SolveError, Unsolvable,
};
pub use crate::solver::{Solver, Stats};
pub use crate::state::BoardState;

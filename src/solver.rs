//! Backtracking search over the availability masks.

use crunchy::unroll;

use crate::bitset::{DigitSet, Empty};
use crate::board::{Cell, Col, Grid, Row};
use crate::errors::{Conflict, Unsolvable};
use crate::state::BoardState;

/// Counters accumulated while solving.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Search invocations, counting the root.
    pub nodes: u64,
    /// Digits tried by the search, successful or not.
    pub guesses: u64,
    /// Cells filled by the naked single pass before the search.
    pub naked_singles: u64,
}

/// Depth-first solver over a [`BoardState`].
///
/// Each step picks the empty cell with the fewest candidates, ties
/// broken by row-major position, and tries its digits in ascending
/// order. That makes solving fully deterministic: the same grid always
/// walks the same tree and returns the same solution.
#[derive(Clone, Debug)]
pub struct Solver {
    state: BoardState,
    stats: Stats,
}

impl Solver {
    /// Builds the solver for `grid`. Fails with [`Conflict`] if the
    /// givens already repeat a digit within a unit.
    pub fn from_grid(grid: &Grid) -> Result<Self, Conflict> {
        Ok(Solver {
            state: BoardState::from_grid(grid)?,
            stats: Stats::default(),
        })
    }

    /// Runs the search and returns the completed grid, or [`Unsolvable`]
    /// if no branch completes the board.
    ///
    /// On success the solution is left in the solver's state. On failure
    /// every placement the search made has been unwound; only cells
    /// filled by the naked single pass remain.
    pub fn solve(&mut self) -> Result<Grid, Unsolvable> {
        self.assign_naked_singles()?;
        self.search()?;
        Ok(self.state.to_grid())
    }

    /// Returns the counters accumulated so far.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Read access to the solver's board state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    // Places forced digits until none remain: any empty cell whose
    // candidate mask holds exactly one digit gets that digit. A cell
    // with an empty mask proves the board unsolvable before any
    // branching happens.
    fn assign_naked_singles(&mut self) -> Result<(), Unsolvable> {
        loop {
            let mut placed_any = false;
            for cell in Cell::all() {
                if self.state.value(cell).is_some() {
                    continue;
                }
                match self.state.candidates(cell).unique() {
                    Ok(Some(digit)) => {
                        self.state.place(cell, digit);
                        self.stats.naked_singles += 1;
                        placed_any = true;
                    }
                    Ok(None) => (),
                    Err(Empty) => return Err(Unsolvable),
                }
            }
            if !placed_any {
                return Ok(());
            }
        }
    }

    // Depth-first search. On success the solution is left in place, on
    // failure the state is exactly as it was on entry: every `place`
    // has a matching `unplace` on the way out.
    fn search(&mut self) -> Result<(), Unsolvable> {
        self.stats.nodes += 1;
        if self.state.is_complete() {
            return Ok(());
        }
        let (cell, candidates) = self.most_constrained_cell();
        for digit in candidates {
            self.stats.guesses += 1;
            self.state.place(cell, digit);
            if self.search().is_ok() {
                return Ok(());
            }
            self.state.unplace(cell, digit);
        }
        // a cell without candidates falls through with an empty loop
        Err(Unsolvable)
    }

    // Returns the empty cell with the fewest candidates, first hit
    // winning ties. Cells with 0 or 1 candidates short-circuit the
    // scan: a dead end can't be rescued by another choice and a forced
    // digit is as constrained as a useful cell gets.
    fn most_constrained_cell(&self) -> (Cell, DigitSet) {
        let mut best: Option<(Cell, DigitSet)> = None;
        let mut best_len = 10;
        unroll! {
            for row in 0..9 {
                for col in 0..9 {
                    let cell = Cell::from_coords(Row::new(row as u8), Col::new(col));
                    if self.state.value(cell).is_none() {
                        let candidates = self.state.candidates(cell);
                        match candidates.len() {
                            0 | 1 => return (cell, candidates),
                            len if len < best_len => {
                                best_len = len;
                                best = Some((cell, candidates));
                            }
                            _ => (),
                        }
                    }
                }
            }
        }
        match best {
            Some(found) => found,
            // search() checks for completion before selecting a cell
            None => unreachable!("no empty cell in an incomplete board"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Digit;

    // row 0 needs 1, 2 and 3 in its first three cells, but the 1 in
    // block 0 limits all three cells to {2, 3}
    const PIGEONHOLE: &str =
        "...456789.........1..............................................................";

    fn solver(line: &str) -> Solver {
        let grid = Grid::from_str_line(line).unwrap();
        Solver::from_grid(&grid).unwrap()
    }

    #[test]
    fn naked_singles_fill_forced_cells() {
        // a full solution with three cells blanked again
        let mut line = String::from(
            "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
        );
        for idx in [0, 40, 80] {
            line.replace_range(idx..idx + 1, ".");
        }
        let mut solver = solver(&line);
        solver.assign_naked_singles().unwrap();
        assert!(solver.state().is_complete());
        assert_eq!(solver.stats().naked_singles, 3);
        assert_eq!(solver.stats().nodes, 0);
    }

    #[test]
    fn mrv_picks_fewest_candidates_row_major() {
        let solver = solver(PIGEONHOLE);
        let (cell, candidates) = solver.most_constrained_cell();
        assert_eq!(cell, Cell::new(0));
        let expected = Digit::new(2).as_set() | Digit::new(3).as_set();
        assert_eq!(candidates, expected);

        // ties broken by the row-major scan
        let empty = Solver::from_grid(&Grid::EMPTY).unwrap();
        let (cell, candidates) = empty.most_constrained_cell();
        assert_eq!(cell, Cell::new(0));
        assert_eq!(candidates, DigitSet::ALL);
    }

    #[test]
    fn failed_search_unwinds_every_placement() {
        let mut solver = solver(PIGEONHOLE);
        let snapshot = solver.state().clone();

        assert_eq!(solver.search(), Err(Unsolvable));
        assert_eq!(*solver.state(), snapshot);

        // 2 and 3 at the root, one forced follow-up each
        assert_eq!(solver.stats().nodes, 5);
        assert_eq!(solver.stats().guesses, 4);
    }

    #[test]
    fn prepass_detects_empty_candidate_mask() {
        // cell (0, 8) needs a 9, but column 8 already has one
        let mut line = String::from(
            "12345678.........................................................................",
        );
        line.replace_range(53..54, "9"); // cell (5, 8)
        let mut solver = solver(&line);
        assert_eq!(solver.assign_naked_singles(), Err(Unsolvable));
    }
}

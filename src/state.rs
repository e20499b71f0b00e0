//! The availability masks that drive the search.

use crate::bitset::DigitSet;
use crate::board::{Cell, Digit, Grid, Unit};
use crate::consts::{N_CELLS, N_UNITS};
use crate::errors::Conflict;
use crate::helper::{CellArray, UnitArray};

/// Tracks which digits remain placeable in every row, column and block,
/// alongside the current contents of all 81 cells.
///
/// The invariant everything rests on: a digit's bit is clear in a unit's
/// mask exactly when that digit occupies some cell of the unit. The set
/// of legal digits for an empty cell is then the AND of its three unit
/// masks, and [`place`](BoardState::place) and
/// [`unplace`](BoardState::unplace) maintain the whole structure in O(1)
/// per call. A search that unwinds its placements in reverse order
/// restores any earlier state exactly, no copies needed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoardState {
    values: CellArray<Option<Digit>>,
    masks: UnitArray<DigitSet>,
    n_filled: u8,
}

impl BoardState {
    /// Builds the state for `grid`, clearing each given's bit from its
    /// three unit masks.
    ///
    /// Fails with [`Conflict`] if two equal givens share a unit. An
    /// input that contradicts itself is rejected here, it never reaches
    /// a search.
    pub fn from_grid(grid: &Grid) -> Result<Self, Conflict> {
        let mut state = BoardState {
            values: CellArray([None; N_CELLS]),
            masks: UnitArray([DigitSet::ALL; N_UNITS]),
            n_filled: 0,
        };
        for (cell, digit) in Cell::all().zip(grid.cells()) {
            if let Some(digit) = digit {
                if !state.candidates(cell).contains(digit) {
                    return Err(Conflict { cell, digit });
                }
                state.place(cell, digit);
            }
        }
        Ok(state)
    }

    /// Returns the digits still placeable in `cell`: the AND of its row,
    /// column and block masks, always recomputed on the spot.
    ///
    /// Only meaningful for empty cells. An occupied cell reports the
    /// digits its units would still allow, which does not include its
    /// own.
    #[inline]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.masks[cell.row()] & self.masks[cell.col()] & self.masks[cell.block()]
    }

    /// Returns the digit in `cell`, or `None` if the cell is empty.
    #[inline]
    pub fn value(&self, cell: Cell) -> Option<Digit> {
        self.values[cell]
    }

    /// Returns the availability mask of one unit.
    pub fn unit_mask(&self, unit: impl Into<Unit>) -> DigitSet {
        self.masks[unit]
    }

    /// Writes `digit` into `cell` and clears its bit from the three
    /// owning masks.
    ///
    /// The cell must be empty and `digit` must be in
    /// [`candidates`](BoardState::candidates); debug assertions check
    /// both.
    #[inline]
    pub fn place(&mut self, cell: Cell, digit: Digit) {
        debug_assert!(
            self.values[cell].is_none(),
            "cell {} is already filled",
            cell.get()
        );
        debug_assert!(
            self.candidates(cell).contains(digit),
            "digit {} is not placeable in cell {}",
            digit,
            cell.get()
        );
        self.values[cell] = Some(digit);
        self.n_filled += 1;
        for unit in cell.units() {
            self.masks[unit].remove(digit);
        }
    }

    /// Exact inverse of [`place`](BoardState::place): empties `cell` and
    /// restores `digit`'s bit in the three owning masks.
    ///
    /// `digit` must be the digit currently in the cell; a debug
    /// assertion checks it.
    #[inline]
    pub fn unplace(&mut self, cell: Cell, digit: Digit) {
        debug_assert_eq!(
            self.values[cell],
            Some(digit),
            "cell {} does not hold digit {}",
            cell.get(),
            digit
        );
        self.values[cell] = None;
        self.n_filled -= 1;
        for unit in cell.units() {
            self.masks[unit].insert(digit);
        }
    }

    /// Checks whether every cell holds a digit.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.n_filled == N_CELLS as u8
    }

    /// Copies the cell values out into a [`Grid`].
    pub fn to_grid(&self) -> Grid {
        let mut grid = [0; N_CELLS];
        for (slot, value) in grid.iter_mut().zip(self.values.iter()) {
            *slot = value.map_or(0, Digit::get);
        }
        Grid(grid)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn state_from_line(line: &str) -> BoardState {
        let grid = Grid::from_str_line(line).unwrap();
        BoardState::from_grid(&grid).unwrap()
    }

    // Recomputes every unit mask from the cell values alone.
    fn recomputed_masks(state: &BoardState) -> Vec<DigitSet> {
        Unit::all()
            .map(|unit| {
                let mut mask = DigitSet::ALL;
                for cell in unit.cells() {
                    if let Some(digit) = state.value(cell) {
                        mask.remove(digit);
                    }
                }
                mask
            })
            .collect()
    }

    fn assert_masks_consistent(state: &BoardState) {
        for (unit, expected) in Unit::all().zip(recomputed_masks(state)) {
            assert_eq!(
                state.unit_mask(unit),
                expected,
                "mask of unit {} diverged from cell values",
                unit.get()
            );
        }
    }

    #[test]
    fn empty_grid_state() {
        let state = BoardState::from_grid(&Grid::EMPTY).unwrap();
        assert!(!state.is_complete());
        for unit in Unit::all() {
            assert_eq!(state.unit_mask(unit), DigitSet::ALL);
        }
        assert_eq!(state.candidates(Cell::new(40)), DigitSet::ALL);
    }

    #[test]
    fn givens_clear_mask_bits() {
        let state = state_from_line(
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
        );
        assert_masks_consistent(&state);
        // row 0 holds 3, 2 and 6
        assert_eq!(
            state.unit_mask(crate::board::Row::new(0)).bits(),
            0b1_1101_1001
        );
    }

    #[test]
    fn place_and_unplace_restore_the_exact_state() {
        let mut state = state_from_line(
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
        );
        let snapshot = state.clone();

        let cell = Cell::new(0);
        assert_eq!(state.value(cell), None);
        let digit = state.candidates(cell).into_iter().next().unwrap();
        state.place(cell, digit);
        assert_eq!(state.value(cell), Some(digit));
        assert!(!state.candidates(cell).contains(digit));
        assert_masks_consistent(&state);

        state.unplace(cell, digit);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn conflicting_row_given_is_rejected() {
        // two 5s in row 0
        let grid = Grid::from_str_line(
            "5...5............................................................................",
        )
        .unwrap();
        assert_eq!(
            BoardState::from_grid(&grid),
            Err(Conflict { cell: Cell::new(4), digit: Digit::new(5) })
        );
    }

    #[test]
    fn conflicting_col_and_block_givens_are_rejected() {
        // two 7s in col 2
        let col_clash = Grid::from_str_line(
            "..7..........................7...................................................",
        )
        .unwrap();
        assert_eq!(
            BoardState::from_grid(&col_clash),
            Err(Conflict { cell: Cell::new(27 + 2), digit: Digit::new(7) })
        );

        // two 1s in block 0, different row and col
        let block_clash = Grid::from_str_line(
            "1..........1.....................................................................",
        )
        .unwrap();
        assert_eq!(
            BoardState::from_grid(&block_clash),
            Err(Conflict { cell: Cell::new(11), digit: Digit::new(1) })
        );
    }

    #[test]
    fn masks_stay_consistent_over_random_operations() {
        use rand::prelude::*;

        let mut rng = rand::thread_rng();
        let mut state = BoardState::from_grid(&Grid::EMPTY).unwrap();
        let mut filled: Vec<(Cell, Digit)> = vec![];

        for _ in 0..2_000 {
            let unplace_one = !filled.is_empty() && rng.gen_bool(0.4);
            if unplace_one {
                let (cell, digit) = filled.swap_remove(rng.gen_range(0..filled.len()));
                state.unplace(cell, digit);
            } else {
                let cell = Cell::new(rng.gen_range(0..81));
                if state.value(cell).is_some() {
                    continue;
                }
                let candidates: Vec<_> = state.candidates(cell).into_iter().collect();
                if let Some(&digit) = candidates.choose(&mut rng) {
                    state.place(cell, digit);
                    filled.push((cell, digit));
                }
            }
            assert_masks_consistent(&state);
        }
    }

    #[test]
    fn complete_state_round_trips_to_grid() {
        let solution = Grid::from_str_line(
            "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
        )
        .unwrap();
        let state = BoardState::from_grid(&solution).unwrap();
        assert!(state.is_complete());
        assert_eq!(state.to_grid(), solution);
        for unit in Unit::all() {
            assert_eq!(state.unit_mask(unit), DigitSet::NONE);
        }
    }
}

use std::fmt;

use crate::bitset::DigitSet;
use crate::board::{Cell, Digit, Unit};
use crate::consts::N_CELLS;
use crate::errors::{FromBytesError, FromBytesSliceError, SolveError};
use crate::parse_errors::{GivensParseError, LineParseError};
use crate::solver::Solver;

/// The 81 cells of a sudoku, given or solved.
///
/// Cells are stored row-major as `0..=9`, where `0` marks an empty cell.
/// A `Grid` is plain data. It enforces the value range but not the unit
/// constraints; those are checked when a [`Solver`] is built from it or
/// via [`is_solved`](Grid::is_solved).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid(pub(crate) [u8; N_CELLS]);

impl Grid {
    /// The grid with every cell empty.
    pub const EMPTY: Grid = Grid([0; N_CELLS]);

    /// Reads a grid from the givens table format: 9 rows of 9
    /// whitespace-separated integers, `0` marking an empty cell.
    ///
    /// Rows that are entirely whitespace are skipped, so blank lines
    /// around or inside the table are fine.
    ///
    /// ```text
    /// 0 0 3 0 2 0 6 0 0
    /// 9 0 0 3 0 5 0 0 1
    /// 0 0 1 8 0 6 4 0 0
    /// 0 0 8 1 0 2 9 0 0
    /// 7 0 0 0 0 0 0 0 8
    /// 0 0 6 7 0 8 2 0 0
    /// 0 0 2 6 0 9 5 0 0
    /// 8 0 0 2 0 3 0 0 9
    /// 0 0 5 0 1 0 3 0 0
    /// ```
    pub fn from_givens(s: &str) -> Result<Grid, GivensParseError> {
        let mut grid = [0; N_CELLS];
        let mut rows = 0u8;
        for line in s.lines().filter(|line| !line.trim().is_empty()) {
            if rows == 9 {
                return Err(GivensParseError::TooManyRows);
            }
            let mut entries = 0;
            for token in line.split_whitespace() {
                match token.parse::<u8>() {
                    Ok(val) if val <= 9 => {
                        if entries < 9 {
                            grid[rows as usize * 9 + entries] = val;
                        }
                        entries += 1;
                    }
                    _ => {
                        return Err(GivensParseError::InvalidEntry {
                            row: rows,
                            token: token.to_owned(),
                        });
                    }
                }
            }
            if entries != 9 {
                return Err(GivensParseError::WrongEntryCount { row: rows, found: entries });
            }
            rows += 1;
        }
        if rows < 9 {
            return Err(GivensParseError::NotEnoughRows(rows));
        }
        Ok(Grid(grid))
    }

    /// Reads a grid from the line format: 81 characters row-major,
    /// `1..=9` for givens and `'0'`, `'.'` or `'_'` for empty cells.
    /// Surrounding whitespace is ignored.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut cell = 0u8;
        for ch in s.trim().chars() {
            if cell == 81 {
                return Err(LineParseError::TooManyCells);
            }
            match ch {
                '1'..='9' => grid[cell as usize] = ch as u8 - b'0',
                '0' | '.' | '_' => (),
                _ => return Err(LineParseError::InvalidEntry { cell, ch }),
            }
            cell += 1;
        }
        if cell < 81 {
            return Err(LineParseError::NotEnoughCells(cell));
        }
        Ok(Grid(grid))
    }

    /// Creates a grid from a byte array, `0` marking an empty cell.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Grid, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Grid(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a grid from a slice of 81 bytes, `0` marking an empty
    /// cell.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Grid, FromBytesSliceError> {
        if bytes.len() != 81 {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Ok(Self::from_bytes(array)?)
    }

    /// Returns the cells as a byte array, row-major, `0` marking an
    /// empty cell.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the digit in `cell`, or `None` if the cell is empty.
    pub fn get(self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Returns an iterator over all cells in row-major order, `None` for
    /// empty cells.
    pub fn cells(self) -> impl Iterator<Item = Option<Digit>> {
        self.0.into_iter().map(Digit::new_checked)
    }

    /// Returns the number of filled cells.
    pub fn n_givens(self) -> u8 {
        self.0.iter().filter(|&&byte| byte != 0).count() as u8
    }

    /// Checks that every cell is filled and no digit repeats within a
    /// row, column or block.
    pub fn is_solved(self) -> bool {
        Unit::all().all(|unit| {
            let mut seen = DigitSet::NONE;
            for cell in unit.cells() {
                match self.get(cell) {
                    Some(digit) => seen.insert(digit),
                    None => return false,
                }
            }
            seen == DigitSet::ALL
        })
    }

    /// Solves the grid and returns the completed copy.
    ///
    /// This is the one-shot entry point. Build a [`Solver`] instead to
    /// inspect masks or search statistics.
    pub fn solve(&self) -> Result<Grid, SolveError> {
        let mut solver = Solver::from_grid(self)?;
        Ok(solver.solve()?)
    }
}

/// Writes the grid in the givens table format, without a trailing
/// newline. Round-trips through [`Grid::from_givens`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, val) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(if idx % 9 == 0 { "\n" } else { " " })?;
            }
            write!(f, "{}", val)?;
        }
        Ok(())
    }
}

/// Writes the grid in the line format.
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Grid(")?;
        for &val in self.0.iter() {
            match val {
                0 => f.write_str(".")?,
                _ => write!(f, "{}", val)?,
            }
        }
        f.write_str(")")
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Grid;
    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};
    use std::fmt;

    /// Serializes as the line format string for human readable formats
    /// and as the raw 81 bytes otherwise.
    impl Serialize for Grid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                let mut line = String::with_capacity(81);
                for &val in self.0.iter() {
                    line.push(match val {
                        0 => '.',
                        _ => (val + b'0') as char,
                    });
                }
                serializer.serialize_str(&line)
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    impl<'de> Deserialize<'de> for Grid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
            struct GridVisitor;

            impl<'de> Visitor<'de> for GridVisitor {
                type Value = Grid;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a line format sudoku or 81 bytes")
                }

                fn visit_str<E: de::Error>(self, s: &str) -> Result<Grid, E> {
                    Grid::from_str_line(s).map_err(de::Error::custom)
                }

                fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Grid, E> {
                    Grid::from_bytes_slice(bytes).map_err(de::Error::custom)
                }
            }

            if deserializer.is_human_readable() {
                deserializer.deserialize_str(GridVisitor)
            } else {
                deserializer.deserialize_bytes(GridVisitor)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const GIVENS: &str = "\
        0 0 3 0 2 0 6 0 0\n\
        9 0 0 3 0 5 0 0 1\n\
        0 0 1 8 0 6 4 0 0\n\
        0 0 8 1 0 2 9 0 0\n\
        7 0 0 0 0 0 0 0 8\n\
        0 0 6 7 0 8 2 0 0\n\
        0 0 2 6 0 9 5 0 0\n\
        8 0 0 2 0 3 0 0 9\n\
        0 0 5 0 1 0 3 0 0\n";

    const LINE: &str = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

    #[test]
    fn givens_and_line_formats_agree() {
        let from_givens = Grid::from_givens(GIVENS)
            .unwrap_or_else(|err| panic!("parse failure: {}", err));
        let from_line = Grid::from_str_line(LINE)
            .unwrap_or_else(|err| panic!("parse failure: {}", err));
        assert_eq!(from_givens, from_line);
        assert_eq!(from_givens.n_givens(), 32);
    }

    #[test]
    fn display_round_trips() {
        let grid = Grid::from_givens(GIVENS).unwrap();
        assert_eq!(Grid::from_givens(&grid.to_string()), Ok(grid));
    }

    #[test]
    fn rejects_wrong_entry_count() {
        let mut bad = GIVENS.replace("9 0 0 3 0 5 0 0 1", "9 0 0 3 0 5 0 0");
        assert_eq!(
            Grid::from_givens(&bad),
            Err(GivensParseError::WrongEntryCount { row: 1, found: 8 })
        );
        bad = GIVENS.replace("9 0 0 3 0 5 0 0 1", "9 0 0 3 0 5 0 0 1 1");
        assert_eq!(
            Grid::from_givens(&bad),
            Err(GivensParseError::WrongEntryCount { row: 1, found: 10 })
        );
    }

    #[test]
    fn rejects_invalid_entry() {
        for broken in ["x", "10", "-1", "3.5"] {
            let bad = GIVENS.replace("8 0 0 2 0 3 0 0 9", &format!("8 0 0 2 0 {} 0 0 9", broken));
            assert_eq!(
                Grid::from_givens(&bad),
                Err(GivensParseError::InvalidEntry { row: 7, token: broken.to_owned() }),
                "entry '{}' was not rejected",
                broken
            );
        }
    }

    #[test]
    fn rejects_wrong_row_count() {
        let missing_last_row = &GIVENS[..GIVENS.rfind("0 0 5").unwrap()];
        assert_eq!(
            Grid::from_givens(missing_last_row),
            Err(GivensParseError::NotEnoughRows(8))
        );
        let extra_row = format!("{}0 0 0 0 0 0 0 0 0\n", GIVENS);
        assert_eq!(Grid::from_givens(&extra_row), Err(GivensParseError::TooManyRows));
    }

    #[test]
    fn accepts_blank_lines() {
        let spaced = GIVENS.replace('\n', "\n\n");
        assert_eq!(Grid::from_givens(&spaced), Grid::from_givens(GIVENS));
    }

    #[test]
    fn rejects_bad_line_formats() {
        assert_eq!(
            Grid::from_str_line(&LINE[..80]),
            Err(LineParseError::NotEnoughCells(80))
        );
        let too_long = format!("{}5", LINE);
        assert_eq!(Grid::from_str_line(&too_long), Err(LineParseError::TooManyCells));
        let invalid = LINE.replace('9', "x");
        assert_eq!(
            Grid::from_str_line(&invalid),
            Err(LineParseError::InvalidEntry { cell: 9, ch: 'x' })
        );
    }

    #[test]
    fn bytes_round_trip() {
        let grid = Grid::from_givens(GIVENS).unwrap();
        assert_eq!(Grid::from_bytes(grid.to_bytes()).unwrap(), grid);
        assert_eq!(Grid::from_bytes_slice(&grid.to_bytes()).unwrap(), grid);
        assert!(Grid::from_bytes([10; 81]).is_err());
        assert!(matches!(
            Grid::from_bytes_slice(&[0; 80]),
            Err(FromBytesSliceError::WrongLength(80))
        ));
    }
}

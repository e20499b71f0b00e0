//! Index types for cells and for the units that constrain them.
//!
//! Everything here is a thin newtype over `u8`. Rows, columns and blocks
//! all number `0..=8`; [`Unit`] flattens the three kinds into one index
//! space `0..=26` (rows, then columns, then blocks) so the availability
//! masks can live in a single array.

use crate::consts::{BLOCK_OFFSET, COL_OFFSET};

macro_rules! define_index_types(
    ($( $(#[$attr:meta])* $name:ident : $limit:expr ),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                /// Constructs a new index.
                ///
                /// # Panics
                /// Panics in debug builds, if the number is out of range.
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                /// Constructs a new index, or `None` if the number is out of range.
                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                /// Returns the index as a number.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the index widened for array access.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all indices, ascending.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_index_types!(
    /// One of the 81 cells, numbered `0..=80` row-major.
    Cell: 81,
    /// One of the 9 rows, `0` topmost.
    Row: 9,
    /// One of the 9 columns, `0` leftmost.
    Col: 9,
    /// One of the 9 blocks, numbered `0..=8` from left to right, top to
    /// bottom.
    Block: 9,
    /// A row, column or block, flattened into one index space: `0..=8`
    /// are the rows, `9..=17` the columns, `18..=26` the blocks.
    Unit: 27,
);

impl Cell {
    /// Constructs the cell at the crossing of `row` and `col`.
    pub fn from_coords(row: Row, col: Col) -> Self {
        Cell::new(row.get() * 9 + col.get())
    }

    /// Returns the row containing this cell.
    #[inline(always)]
    pub fn row(self) -> Row {
        Row::new(self.0 / 9)
    }

    /// Returns the column containing this cell.
    #[inline(always)]
    pub fn col(self) -> Col {
        Col::new(self.0 % 9)
    }

    /// Returns the 3x3 block containing this cell. Blocks are numbered
    /// `0..=8` row-major, so `block = row / 3 * 3 + col / 3`.
    #[inline(always)]
    pub fn block(self) -> Block {
        Block::new(self.0 / 27 * 3 + self.0 % 9 / 3)
    }

    /// Returns the three units that constrain this cell.
    #[inline]
    pub fn units(self) -> [Unit; 3] {
        [self.row().into(), self.col().into(), self.block().into()]
    }
}

impl Unit {
    /// Returns the nine cells of this unit, ascending.
    pub fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell(0); 9];
        let (kind, nr) = (self.0 / 9, self.0 % 9);
        for (pos, cell) in cells.iter_mut().enumerate() {
            let pos = pos as u8;
            *cell = match kind {
                0 => Cell::new(nr * 9 + pos),
                1 => Cell::new(pos * 9 + nr),
                _ => {
                    let corner = nr / 3 * 27 + nr % 3 * 3;
                    Cell::new(corner + pos / 3 * 9 + pos % 3)
                }
            };
        }
        cells
    }
}

impl From<Row> for Unit {
    fn from(row: Row) -> Self {
        Unit::new(row.get())
    }
}

impl From<Col> for Unit {
    fn from(col: Col) -> Self {
        Unit::new(col.get() + COL_OFFSET)
    }
}

impl From<Block> for Unit {
    fn from(block: Block) -> Self {
        Unit::new(block.get() + BLOCK_OFFSET)
    }
}

//! Cell and unit counts used throughout the crate.

pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_UNITS: usize = 27;

// Layout of the unit index space: rows first, then columns, then blocks.
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;

//! The board's plain data: digits, positions and the 81-cell grid.
mod digit;
mod grid;
pub mod positions;

pub use self::{
    digit::Digit,
    grid::Grid,
    positions::{Block, Cell, Col, Row, Unit},
};

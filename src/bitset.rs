//! The 9-bit digit set backing every availability mask.
//!
//! Digit `d` occupies bit `1 << (d - 1)`, so a mask fits in the low nine
//! bits of a `u16`. All the pruning the solver ever does is ANDing three
//! of these together, which keeps the representation worth guarding: the
//! newtype stops digit masks from mixing with other integers.

use crate::board::Digit;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// A set of digits, stored as a 9-bit mask.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set of all nine digits.
    pub const ALL: DigitSet = DigitSet(0o777);

    /// The empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// Constructs a set from a raw mask.
    ///
    /// # Panics
    /// Panics, if the integer contains bits above [`DigitSet::ALL`].
    pub fn from_bits(mask: u16) -> Self {
        assert!(mask <= Self::ALL.0);
        DigitSet(mask)
    }

    /// Returns the raw mask backing the set.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns the number of digits in the set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether the set contains no digit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks whether `digit` is in the set.
    #[inline(always)]
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & digit.as_set().0 != 0
    }

    /// Adds `digit` to the set.
    #[inline(always)]
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= digit.as_set().0;
    }

    /// Deletes `digit` from the set.
    #[inline(always)]
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !digit.as_set().0;
    }

    /// Returns the only digit in the set, iff exactly 1 digit exists.
    /// If no digit exists, it returns `Err(Empty)`.
    /// If more than 1 digit exists, it returns `Ok(None)`.
    pub fn unique(self) -> Result<Option<Digit>, Empty> {
        match self.0 {
            0 => Err(Empty),
            bits if bits.is_power_of_two() => {
                Ok(Some(Digit::from_index(bits.trailing_zeros() as u8)))
            }
            _ => Ok(None),
        }
    }
}

impl Digit {
    /// Returns the set containing only this digit, i.e. the mask
    /// `1 << (digit - 1)`.
    #[inline(always)]
    pub fn as_set(self) -> DigitSet {
        DigitSet(1 << self.as_index() as u8)
    }
}

/// Potential return value for [`DigitSet::unique`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Empty;

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident);* $(;)? ) => {
        $(
            impl $trait for DigitSet {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    DigitSet($trait::$fn_name(self.0, other.0))
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident);* $(;)? ) => {
        $(
            impl $trait for DigitSet {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
);

/// Iterator over the digits contained in a [`DigitSet`], ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iter(u16);

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & (!self.0 + 1);
        self.0 ^= lowest_bit;
        Some(Digit::from_index(lowest_bit.trailing_zeros() as u8))
    }
}

impl fmt::Binary for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // keep width and fill flags working, `{:09b}` is the usual way
        // to print a mask
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSet({:09b})", self.0)
    }
}

use std::fmt;
use std::num::NonZeroU8;

/// One of the nine digits a cell can hold.
///
/// `Option<Digit>` models an empty cell at no size cost thanks to the
/// `NonZeroU8` niche.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panics
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        match Self::new_checked(digit) {
            Some(digit) => digit,
            None => panic!("digit outside 1..=9: {}", digit),
        }
    }

    /// Constructs a new `Digit`, or `None` if the value is outside `1..=9`.
    /// `0` is not a digit, it marks an empty cell.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs the digit whose mask bit is `1 << idx`, i.e. `idx + 1`.
    ///
    /// # Panics
    /// Panics, if the index is not in the range of `0..=8`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new(idx + 1)
    }

    /// Returns an iterator over all digits, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=9).map(Digit::new)
    }

    /// Returns the digit as a number.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit's position in the mask bit order, i.e. `digit - 1`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digit_range() {
        assert!(Digit::new_checked(0).is_none());
        assert!(Digit::new_checked(10).is_none());
        for num in 1..=9 {
            assert_eq!(Digit::new_checked(num).map(Digit::get), Some(num));
        }
    }

    #[test]
    fn index_round_trip() {
        for (idx, digit) in Digit::all().enumerate() {
            assert_eq!(digit.as_index(), idx);
            assert_eq!(Digit::from_index(idx as u8), digit);
        }
    }
}

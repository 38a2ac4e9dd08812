//! # SquareSet - Attacked-Square Sets as a Single u64
//!
//! Check detection asks one question over and over: "is this square in the
//! set of squares the other side attacks?". A 64-bit integer with one bit
//! per square answers that with a single AND, and building the set is just a
//! run of ORs.
//!
//! Bit `n` corresponds to the square with row-major index `n`, so bit 0 is
//! `a8` (top-left, `x = 0, y = 0`) and bit 63 is `h1`.

use crate::types::Square;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub fn new() -> Self {
        SquareSet(0)
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1u64 << square.index());
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        (self.0 & (1u64 << square.index())) != 0
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Squares in the set, row-major
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |sq| self.contains(*sq))
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for square in iter {
            self.insert(square);
        }
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::new();
        set.extend(iter);
        set
    }
}

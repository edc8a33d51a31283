//! Bitboard implementation for one player's occupancy plane

use super::MAX_CELLS;

/// One occupancy plane. A single u128 covers the 100 cells of a 10x10 board,
/// so windows can be tested with one mask comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u128,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Bitboard with the lowest `cells` bits set
    pub const fn full(cells: usize) -> Self {
        debug_assert!(cells <= MAX_CELLS);
        if cells == 128 {
            Self { bits: u128::MAX }
        } else {
            Self { bits: (1u128 << cells) - 1 }
        }
    }

    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn bits(self) -> u128 {
        self.bits
    }

    #[inline]
    pub fn set(&mut self, idx: usize) {
        self.bits |= 1u128 << idx;
    }

    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.bits &= !(1u128 << idx);
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        (self.bits >> idx) & 1 == 1
    }

    /// True if every bit of `mask` is set here
    #[inline]
    pub fn contains_all(&self, mask: u128) -> bool {
        self.bits & mask == mask
    }

    /// True if any bit of `mask` is set here
    #[inline]
    pub fn intersects(&self, mask: u128) -> bool {
        self.bits & mask != 0
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit indices, lowest first
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits | rhs.bits }
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits & rhs.bits }
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard { bits: !self.bits }
    }
}

/// Iterator over set bits in a Bitboard
///
/// Owns a copy of the bits, so the board it came from can be mutated
/// while iterating.
#[derive(Debug, Clone)]
pub struct BitboardIter {
    bits: u128,
}

impl Iterator for BitboardIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

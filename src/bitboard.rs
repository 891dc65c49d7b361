//! A fixed-size coordinate set packed into an unsigned integer.
//!
//! Boards are represented as an `N×N` grid where bit `row * N + col` marks
//! membership. The type is `Copy` and never allocates.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds(Coordinate),
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds(c) => {
                write!(f, "IndexOutOfBounds: row={}, col={}", c.row, c.col)
            }
        }
    }
}

/// A set of coordinates on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "board does not fit in T");

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; coordinates off the grid are never members.
    pub fn contains(&self, c: Coordinate) -> bool {
        match Self::index(c) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `c`, returning `true` if it was not present before.
    pub fn insert(&mut self, c: Coordinate) -> Result<bool, BitBoardError> {
        let idx = Self::index(c)?;
        let was = self.contains(c);
        self.bits = self.bits | (T::one() << idx);
        Ok(!was)
    }

    /// Removes every coordinate.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(c: Coordinate) -> Result<usize, BitBoardError> {
        if c.row >= N || c.col >= N {
            Err(BitBoardError::IndexOutOfBounds(c))
        } else {
            Ok(c.row * N + c.col)
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coordinate::new(r, c)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

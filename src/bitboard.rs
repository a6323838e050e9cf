//! A fixed-size bitboard using const generics.
//!
//! Cells of an `N×N` grid are packed into the unsigned integer `T`, which
//! keeps a strategy's memory of targeted cells `Copy` and allocation free.
//! Points outside the grid are never set and always read as clear.

use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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
    const FITS: () = assert!(N * N <= core::mem::size_of::<T>() * 8, "N*N exceeds T::BITS");

    /// Create a new empty bitboard.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn index(p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row as usize >= N || p.col as usize >= N {
            None
        } else {
            Some(p.row as usize * N + p.col as usize)
        }
    }

    /// Whether `p` is set. Out-of-grid points read as clear.
    #[inline]
    pub fn get(&self, p: Point) -> bool {
        Self::index(p).is_some_and(|idx| ((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Set `p`, returning `false` if it lies outside the grid.
    #[inline]
    pub fn set(&mut self, p: Point) -> bool {
        match Self::index(p) {
            Some(idx) => {
                self.bits = self.bits | (T::one() << idx);
                true
            }
            None => false,
        }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

//! A set of grid cells packed into a single unsigned integer.
//!
//! `BitBoard<T, N>` addresses an `N×N` square in row-major order, one bit per
//! cell. It is `no_std` friendly and `Copy`. The board keeps several of these
//! (placement reservations, shots, revealed buffers) and unions them to
//! answer "is this cell busy".

use core::ops::{BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Fixed-capacity cell set over an `N×N` square stored in `T`.
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
    /// Compile-time guard; evaluated whenever `new` is instantiated.
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "bitboard too small");

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn index(coord: Coordinate) -> Option<usize> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (r, c) = (coord.row as usize, coord.col as usize);
        if r >= N || c >= N {
            None
        } else {
            Some(r * N + c)
        }
    }

    /// `true` if the cell is in the set. Cells outside `N×N` never are.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds the cell, returning `true` if it was not already present.
    /// Cells outside `N×N` are ignored.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let Some(idx) = Self::index(coord) else {
            return false;
        };
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        fresh
    }

    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Row-major iterator over member cells.
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells {
            board: self,
            idx: 0,
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

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for coord in iter {
            board.insert(coord);
        }
        board
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N as i32 {
            for c in 0..N as i32 {
                let glyph = if self.contains(Coordinate::new(r, c)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

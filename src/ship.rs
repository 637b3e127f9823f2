//! Ship types and the footprint of a placed ship, tracked with `BitBoard`s.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::{BitBoard, SetBits};
use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The cell `i` steps from (`row`, `col`) along this orientation.
    #[inline]
    pub fn step(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// Roster entry: a ship's name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board. `hits` is always a subset of `mask`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place a ship with its bow at (`row`, `col`), extending right or down.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        if len == 0 {
            return Err(BoardError::EmptyShip);
        }
        if row >= N || col >= N {
            return Err(BoardError::ShipOutOfBounds);
        }
        let (end_row, end_col) = orientation.step(row, col, len - 1);
        if end_row >= N || end_col >= N {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mask = BitBoard::from_cells((0..len).map(|i| orientation.step(row, col, i)))?;
        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// Records a hit if (`row`, `col`) belongs to this ship.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.contains(row, col) {
            let _ = self.hits.set(row, col);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.mask
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Bow position (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells the ship occupies.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    /// Cells of the ship that have been hit.
    pub fn hits(&self) -> BitBoard<T, N> {
        self.hits
    }

    pub fn cells(&self) -> SetBits<T, N> {
        self.mask.iter_set_bits()
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits.count_ones(),
            self.ship_type.length(),
        )
    }
}

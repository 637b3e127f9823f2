//! Target grid: ship placements plus the hits and misses fired against them.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, GuessResult};
use crate::config::GRID_SIZE;
use crate::ship::{Orientation, Ship, ShipType};

/// Mask covering the whole grid.
pub type GridMask = BitBoard<u128, GRID_SIZE>;

/// A ship placed on the standard grid.
pub type PlacedShip = Ship<u128, GRID_SIZE>;

/// What the player knows about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum CellState {
    #[default]
    Unknown,
    Miss,
    Hit,
}

pub struct Board {
    fleet: Vec<ShipType>,
    ships: Vec<Option<PlacedShip>>,
    ship_map: GridMask,
    hits: GridMask,
    misses: GridMask,
}

impl Board {
    /// Empty board for `fleet`; nothing placed, nothing fired.
    pub fn new(fleet: &[ShipType]) -> Self {
        Board {
            fleet: fleet.to_vec(),
            ships: fleet.iter().map(|_| None).collect(),
            ship_map: GridMask::new(),
            hits: GridMask::new(),
            misses: GridMask::new(),
        }
    }

    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Placed ship at `ship_index`, if any.
    pub fn ship(&self, ship_index: usize) -> Option<&PlacedShip> {
        self.ships.get(ship_index).and_then(Option::as_ref)
    }

    /// Placed ships in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &PlacedShip> {
        self.ships.iter().flatten()
    }

    /// Ship occupying (`row`, `col`).
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&PlacedShip> {
        self.ships().find(|s| s.contains(row, col))
    }

    pub fn is_fully_placed(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    pub fn sunk_count(&self) -> usize {
        self.ships().filter(|s| s.is_sunk()).count()
    }

    /// Returns `true` when every ship of the fleet is placed and sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.as_ref().is_some_and(|s| s.is_sunk()))
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> GridMask {
        self.ship_map
    }

    pub fn hits(&self) -> GridMask {
        self.hits
    }

    pub fn misses(&self) -> GridMask {
        self.misses
    }

    /// Cells that have not been fired upon.
    pub fn unfired(&self) -> GridMask {
        !(self.hits | self.misses)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        if self.hits.get(row, col)? {
            Ok(CellState::Hit)
        } else if self.misses.get(row, col)? {
            Ok(CellState::Miss)
        } else {
            Ok(CellState::Unknown)
        }
    }

    /// Full grid of cell states, row-major.
    pub fn cells(&self) -> [[CellState; GRID_SIZE]; GRID_SIZE] {
        let mut grid = [[CellState::Unknown; GRID_SIZE]; GRID_SIZE];
        for (r, c) in self.hits.iter_set_bits() {
            grid[r][c] = CellState::Hit;
        }
        for (r, c) in self.misses.iter_set_bits() {
            grid[r][c] = CellState::Miss;
        }
        grid
    }

    /// Place a single ship by index at (row, col) and orientation.
    pub fn place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let def = *self.fleet.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = PlacedShip::new(def, orientation, row, col)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Samples orientation and anchor uniformly until the span fits and is
    /// clear, for at most `max_attempts` samples.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_index: usize,
        max_attempts: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let def = *self.fleet.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        for _ in 0..max_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..GRID_SIZE);
            let col = rng.random_range(0..GRID_SIZE);
            let ship = match PlacedShip::new(def, orientation, row, col) {
                Ok(ship) => ship,
                Err(BoardError::ShipOutOfBounds) => continue,
                Err(e) => return Err(e),
            };
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((row, col, orientation));
            }
        }
        log::warn!(
            "gave up placing {} after {} attempts",
            def.name(),
            max_attempts
        );
        Err(BoardError::UnableToPlaceShip {
            ship: def.name(),
            attempts: max_attempts,
        })
    }

    /// Randomly places every ship not yet on the board, in fleet order.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R, max_attempts: usize) -> Result<(), BoardError> {
        for i in 0..self.fleet.len() {
            if self.ships[i].is_some() {
                continue;
            }
            let (r, c, o) = self.random_placement(rng, i, max_attempts)?;
            self.place(i, r, c, o)?;
        }
        Ok(())
    }

    /// Fire at (row, col), marking a hit or miss and reporting the result.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(BoardError::AlreadyGuessed);
        }
        match self.ships.iter_mut().flatten().find(|s| s.contains(row, col)) {
            Some(ship) => {
                ship.register_hit(row, col);
                self.hits.set(row, col)?;
                if ship.is_sunk() {
                    Ok(GuessResult::Sink(ship.name()))
                } else {
                    Ok(GuessResult::Hit(ship.name()))
                }
            }
            None => {
                self.misses.set(row, col)?;
                Ok(GuessResult::Miss)
            }
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships
        )
    }
}

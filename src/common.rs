//! Common types: per-cell guess results and the board/config error enums.

use core::fmt;

use crate::bitboard::BitBoardError;

/// What a single shot did on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// No ship at the cell.
    Miss,
    /// Struck the named ship, which is still afloat.
    Hit(&'static str),
    /// Struck the last intact cell of the named ship.
    Sink(&'static str),
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g. out-of-range cell).
    BitBoardError(BitBoardError),
    /// Ship index is not part of the fleet.
    InvalidIndex,
    /// Ship type has zero length.
    EmptyShip,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement runs off the grid.
    ShipOutOfBounds,
    /// The cell was already fired upon.
    AlreadyGuessed,
    /// Random placement ran out of attempts.
    UnableToPlaceShip { ship: &'static str, attempts: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::EmptyShip => write!(f, "Ship has zero length"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyGuessed => write!(f, "Cell was already fired upon"),
            BoardError::UnableToPlaceShip { ship, attempts } => {
                write!(f, "Unable to place {} after {} attempts", ship, attempts)
            }
        }
    }
}

/// Malformed game configuration. Raised when a session is built, never mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyFleet,
    EmptyShip { ship: &'static str },
    ShipTooLong { ship: &'static str, length: usize, max: usize },
    /// Ships are reported to the player by name, so names must be unique.
    DuplicateShipName { ship: &'static str },
    FleetTooLarge { cells: usize, capacity: usize },
    NoShots,
    NoPlacementAttempts,
    /// The fleet passed validation but random placement could not fit it.
    Placement(BoardError),
}

impl From<BoardError> for ConfigError {
    fn from(err: BoardError) -> Self {
        ConfigError::Placement(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyFleet => write!(f, "Fleet has no ships"),
            ConfigError::EmptyShip { ship } => write!(f, "Ship {} has zero length", ship),
            ConfigError::ShipTooLong { ship, length, max } => {
                write!(f, "Ship {} has length {}, grid allows at most {}", ship, length, max)
            }
            ConfigError::DuplicateShipName { ship } => {
                write!(f, "Ship name {} appears more than once", ship)
            }
            ConfigError::FleetTooLarge { cells, capacity } => {
                write!(f, "Fleet covers {} cells, grid has {}", cells, capacity)
            }
            ConfigError::NoShots => write!(f, "Shot budget must be at least 1"),
            ConfigError::NoPlacementAttempts => {
                write!(f, "Placement attempt limit must be at least 1")
            }
            ConfigError::Placement(e) => write!(f, "Fleet placement failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::BitBoardError(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Placement(e) => Some(e),
            _ => None,
        }
    }
}

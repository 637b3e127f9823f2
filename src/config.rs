use alloc::vec::Vec;

use crate::common::ConfigError;
use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const GRID_SIZE: usize = BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Yamato", 5),
    ShipType::new("USS Arizona", 4),
    ShipType::new("HMS Hood", 3),
    ShipType::new("Bismarck", 3),
    ShipType::new("HMS Prince of Wales", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Torpedoes available per game.
pub const SHOT_BUDGET: u32 = 30;

/// Random placement attempts per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

pub const SHIP_IMAGES: [(&str, &str); NUM_SHIPS] = [
    ("Yamato", "ships/yamato.png"),
    ("USS Arizona", "ships/arizona.png"),
    ("HMS Hood", "ships/hood.png"),
    ("Bismarck", "ships/bismarck.png"),
    ("HMS Prince of Wales", "ships/prince.png"),
];

pub const DEFAULT_SHIP_IMAGE: &str = "ships/default.png";

/// Image shown when `name` is sunk, falling back to [`DEFAULT_SHIP_IMAGE`].
pub fn ship_image(name: &str) -> &'static str {
    SHIP_IMAGES
        .iter()
        .find(|(ship, _)| *ship == name)
        .map(|(_, path)| *path)
        .unwrap_or(DEFAULT_SHIP_IMAGE)
}

/// Validated game parameters. [`Default`] is the standard game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    fleet: Vec<ShipType>,
    shot_budget: u32,
    max_placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fleet: SHIPS.to_vec(),
            shot_budget: SHOT_BUDGET,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Custom fleet and budget; fails fast if the fleet cannot work on the grid.
    pub fn new(fleet: &[ShipType], shot_budget: u32) -> Result<Self, ConfigError> {
        let config = Self {
            fleet: fleet.to_vec(),
            shot_budget,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_shot_budget(mut self, shot_budget: u32) -> Result<Self, ConfigError> {
        self.shot_budget = shot_budget;
        self.validate()?;
        Ok(self)
    }

    pub fn with_max_placement_attempts(mut self, attempts: usize) -> Result<Self, ConfigError> {
        self.max_placement_attempts = attempts;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for (i, def) in self.fleet.iter().enumerate() {
            if def.length() == 0 {
                return Err(ConfigError::EmptyShip { ship: def.name() });
            }
            if def.length() > GRID_SIZE {
                return Err(ConfigError::ShipTooLong {
                    ship: def.name(),
                    length: def.length(),
                    max: GRID_SIZE,
                });
            }
            if self.fleet[..i].iter().any(|other| other.name() == def.name()) {
                return Err(ConfigError::DuplicateShipName { ship: def.name() });
            }
        }
        let cells = self.total_ship_cells();
        if cells > GRID_SIZE * GRID_SIZE {
            return Err(ConfigError::FleetTooLarge {
                cells,
                capacity: GRID_SIZE * GRID_SIZE,
            });
        }
        if self.shot_budget == 0 {
            return Err(ConfigError::NoShots);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }

    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    pub fn shot_budget(&self) -> u32 {
        self.shot_budget
    }

    pub fn max_placement_attempts(&self) -> usize {
        self.max_placement_attempts
    }

    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(ShipType::length).sum()
    }
}

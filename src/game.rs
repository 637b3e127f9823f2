use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    board::{Board, CellState},
    common::{ConfigError, GuessResult},
    config::{GameConfig, GRID_SIZE},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Effect of a single `fire_at` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ShotOutcome {
    /// Out of bounds, already fired upon, or the game is over. Nothing changed.
    Ignored,
    Miss,
    Hit { ship: &'static str, sunk: bool },
}

/// Everything presentation needs to react to one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotResult {
    pub target: (usize, usize),
    pub outcome: ShotOutcome,
    pub status: GameStatus,
    pub remaining_shots: u32,
    /// Set on the first accepted shot of a game only.
    pub first_shot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipSummary {
    pub name: &'static str,
    pub size: usize,
    pub sunk: bool,
}

/// Player-visible view of a session. Ship positions are not included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub started: bool,
    pub remaining_shots: u32,
    pub shot_budget: u32,
    pub ships_sunk: usize,
    pub cells: [[CellState; GRID_SIZE]; GRID_SIZE],
    pub ships: Vec<ShipSummary>,
}

/// One player's game: the hidden fleet, the shots fired at it, and the budget.
///
/// The session owns its RNG so `new_game` can re-place the fleet without
/// outside help; seed it for reproducible games.
pub struct GameSession<R = SmallRng> {
    config: GameConfig,
    rng: R,
    board: Board,
    remaining_shots: u32,
    ships_sunk: usize,
    status: GameStatus,
    started: bool,
}

#[cfg(feature = "std")]
impl GameSession<SmallRng> {
    /// Session seeded from the thread-local entropy source.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut seed_rng = rand::rng();
        Self::from_rng(config, SmallRng::from_rng(&mut seed_rng))
    }
}

impl GameSession<SmallRng> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Validates `config` and places the first fleet.
    pub fn from_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.fleet());
        let mut session = Self {
            remaining_shots: config.shot_budget(),
            config,
            rng,
            board,
            ships_sunk: 0,
            status: GameStatus::InProgress,
            started: false,
        };
        session.new_game()?;
        Ok(session)
    }

    /// Discards the current board and starts over with a fresh placement.
    pub fn new_game(&mut self) -> Result<GameSnapshot, ConfigError> {
        let mut board = Board::new(self.config.fleet());
        board.place_fleet(&mut self.rng, self.config.max_placement_attempts())?;

        self.board = board;
        self.remaining_shots = self.config.shot_budget();
        self.ships_sunk = 0;
        self.status = GameStatus::InProgress;
        self.started = false;
        log::info!(
            "new game: {} ships, {} torpedoes",
            self.config.fleet().len(),
            self.remaining_shots
        );
        Ok(self.snapshot())
    }

    /// Resolve a shot at (`row`, `col`).
    pub fn fire_at(&mut self, row: usize, col: usize) -> ShotResult {
        if self.status.is_over() || self.remaining_shots == 0 {
            log::debug!("shot at ({}, {}) ignored: game is over", row, col);
            return self.result((row, col), ShotOutcome::Ignored, false);
        }
        let guess = match self.board.guess(row, col) {
            Ok(guess) => guess,
            Err(e) => {
                log::debug!("shot at ({}, {}) ignored: {}", row, col, e);
                return self.result((row, col), ShotOutcome::Ignored, false);
            }
        };

        let first_shot = !self.started;
        self.started = true;
        self.remaining_shots = self.remaining_shots.saturating_sub(1);

        let outcome = match guess {
            GuessResult::Miss => ShotOutcome::Miss,
            GuessResult::Hit(ship) => ShotOutcome::Hit { ship, sunk: false },
            GuessResult::Sink(ship) => {
                self.ships_sunk += 1;
                ShotOutcome::Hit { ship, sunk: true }
            }
        };
        self.status = self.evaluate();
        log::debug!(
            "shot at ({}, {}): {:?}, {} left, {:?}",
            row,
            col,
            outcome,
            self.remaining_shots,
            self.status
        );
        self.result((row, col), outcome, first_shot)
    }

    // A last-shot sink counts as a win: the fleet check runs first.
    fn evaluate(&self) -> GameStatus {
        if self.ships_sunk == self.board.fleet().len() {
            GameStatus::Won
        } else if self.remaining_shots == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    fn result(&self, target: (usize, usize), outcome: ShotOutcome, first_shot: bool) -> ShotResult {
        ShotResult {
            target,
            outcome,
            status: self.status,
            remaining_shots: self.remaining_shots,
            first_shot,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let ships = self
            .board
            .fleet()
            .iter()
            .enumerate()
            .map(|(i, def)| ShipSummary {
                name: def.name(),
                size: def.length(),
                sunk: self.board.ship(i).is_some_and(|s| s.is_sunk()),
            })
            .collect();
        GameSnapshot {
            status: self.status,
            started: self.started,
            remaining_shots: self.remaining_shots,
            shot_budget: self.config.shot_budget(),
            ships_sunk: self.ships_sunk,
            cells: self.board.cells(),
            ships,
        }
    }

    pub fn remaining_shots(&self) -> u32 {
        self.remaining_shots
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// At least one shot has been accepted this game.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// The hidden board. Presentation uses it to reveal ships after the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

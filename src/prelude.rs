//! Commonly used types and utilities for ease of import.

pub use crate::{
    GameConfig, GameSession, GameSnapshot, GameStatus, Presenter, ShotOutcome, ShotResult,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsolePresenter};

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod autoplay;
mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod console;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod presenter;
mod ship;

pub use autoplay::{pick_target, play_out};
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use console::ConsolePresenter;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use presenter::*;
pub use ship::*;

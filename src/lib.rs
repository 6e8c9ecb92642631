#![cfg_attr(not(feature = "std"), no_std)]

//! Rules engine for the Game of the Amazons.
//!
//! Each turn a player relocates one of their amazons like a chess queen,
//! then fires an arrow from its new square along a queen line; the arrow
//! blocks its square for the rest of the game. The engine tracks board
//! occupancy, validates moves and shots, and — because games end by the
//! board dividing into territories rather than by checkmate — classifies
//! every region of the board by who controls it in order to detect game
//! end and score the result.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod moves;
mod region;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{Grid, GridError, Positions};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use region::RegionControl;

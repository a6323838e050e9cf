#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
mod game;
pub mod hunt;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod player;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::BitBoard;
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use hunt::{Anchor, HuntTarget, Mode};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::{place_fleet, place_from};
pub use player::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;

//! Ship definitions and footprint geometry.

use alloc::string::String;
use core::fmt;

use crate::common::Point;

/// Stable index of a ship in its fleet, assigned at registration.
pub type ShipId = usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends to the right of its origin.
    Horizontal,
    /// Extends downward from its origin.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Type of ship: length, display symbol and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipDef {
    length: i32,
    symbol: char,
    name: String,
}

impl ShipDef {
    pub(crate) fn new(length: i32, symbol: char, name: String) -> Self {
        Self {
            length,
            symbol,
            name,
        }
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Cells covered by a ship of `length` placed at `origin`.
pub fn footprint(
    origin: Point,
    orientation: Orientation,
    length: i32,
) -> impl Iterator<Item = Point> {
    let (dr, dc) = orientation.step();
    (0..length).map(move |i| origin.offset(dr * i, dc * i))
}

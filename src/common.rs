//! Common types for the game: coordinates, attack results and errors.

use core::fmt;

use crate::ship::ShipId;

/// A (row, column) coordinate. Signed so that offsets computed around a
/// hit may step off the board and simply be rejected as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The point shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Result of an accepted attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// The shot landed in open water.
    Miss,
    /// The shot hit a ship that still has intact cells.
    Hit(ShipId),
    /// The shot hit the last intact cell of a ship.
    Sunk(ShipId),
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, AttackResult::Sunk(_))
    }

    /// Id of the ship that was struck, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            AttackResult::Miss => None,
            AttackResult::Hit(id) | AttackResult::Sunk(id) => Some(id),
        }
    }
}

/// Errors returned by Board operations. None of them leave the board
/// modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship id is not registered in the fleet.
    InvalidShipId(ShipId),
    /// Coordinate or part of a footprint lies outside the board.
    OutOfBounds(Point),
    /// Footprint covers a cell that is not empty.
    Overlaps(Point),
    /// Ship already sits somewhere on the board.
    AlreadyPlaced(ShipId),
    /// Footprint does not match the ship's current placement.
    NotPlaced(ShipId),
    /// Cell has already been shot at.
    AlreadyAttacked(Point),
    /// Backtracking search could not fit the fleet within its retry budget.
    PlacementExhausted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidShipId(id) => write!(f, "No ship registered with id {}", id),
            BoardError::OutOfBounds(p) => write!(f, "Coordinate {} is outside the board", p),
            BoardError::Overlaps(p) => write!(f, "Cell {} is not free for placement", p),
            BoardError::AlreadyPlaced(id) => write!(f, "Ship {} is already placed", id),
            BoardError::NotPlaced(id) => write!(f, "Ship {} is not placed there", id),
            BoardError::AlreadyAttacked(p) => write!(f, "Cell {} was already attacked", p),
            BoardError::PlacementExhausted => write!(f, "Unable to place the fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Fatal setup errors: bad board dimensions or ship definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BadDimensions { rows: i32, cols: i32 },
    BadLength(i32),
    UnprintableSymbol(char),
    ReservedSymbol(char),
    DuplicateSymbol(char),
    FleetTooLarge { total: i32, capacity: i32 },
    EmptyFleet,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BadDimensions { rows, cols } => write!(
                f,
                "Board must have between 1 and {} rows and 1 and {} columns, got {}x{}",
                crate::config::MAX_ROWS,
                crate::config::MAX_COLS,
                rows,
                cols
            ),
            ConfigError::BadLength(len) => {
                write!(f, "Bad ship length {}; it won't fit on the board", len)
            }
            ConfigError::UnprintableSymbol(ch) => write!(
                f,
                "Unprintable character {:?} must not be used as a ship symbol",
                ch
            ),
            ConfigError::ReservedSymbol(ch) => {
                write!(f, "Character {} must not be used as a ship symbol", ch)
            }
            ConfigError::DuplicateSymbol(ch) => write!(
                f,
                "Ship symbol {} must not be used for more than one ship",
                ch
            ),
            ConfigError::FleetTooLarge { total, capacity } => write!(
                f,
                "Board is too small to fit all ships ({} cells needed, {} available)",
                total, capacity
            ),
            ConfigError::EmptyFleet => write!(f, "Fleet has no ships"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

//! Fleet registry: the ship catalog shared read-only by boards and players.
//!
//! Ships are registered once during setup and never change afterward. A
//! ship's id is its registration index.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::ConfigError;
use crate::config::{Dimensions, RESERVED_SYMBOLS, STANDARD_SHIPS};
use crate::ship::{ShipDef, ShipId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    dims: Dimensions,
    ships: Vec<ShipDef>,
}

impl Fleet {
    /// Create an empty registry for boards of the given size.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            ships: Vec::new(),
        }
    }

    /// Registry preloaded with the classic five-ship fleet.
    pub fn standard(dims: Dimensions) -> Result<Self, ConfigError> {
        let mut fleet = Self::new(dims);
        for (length, symbol, name) in STANDARD_SHIPS {
            fleet.add_ship(length, symbol, name)?;
        }
        Ok(fleet)
    }

    /// Register a ship, returning its id.
    pub fn add_ship(
        &mut self,
        length: i32,
        symbol: char,
        name: impl Into<String>,
    ) -> Result<ShipId, ConfigError> {
        if length < 1 || (length > self.dims.rows() && length > self.dims.cols()) {
            return Err(ConfigError::BadLength(length));
        }
        if !symbol.is_ascii_graphic() {
            return Err(ConfigError::UnprintableSymbol(symbol));
        }
        if RESERVED_SYMBOLS.contains(&symbol) {
            return Err(ConfigError::ReservedSymbol(symbol));
        }
        if self.ships.iter().any(|s| s.symbol() == symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        let total = self.total_length() + length;
        if total > self.dims.cell_count() {
            return Err(ConfigError::FleetTooLarge {
                total,
                capacity: self.dims.cell_count(),
            });
        }
        let id = self.ships.len();
        log::debug!("registered ship {} '{}' (length {})", id, symbol, length);
        self.ships.push(ShipDef::new(length, symbol, name.into()));
        Ok(id)
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, id: ShipId) -> Option<&ShipDef> {
        self.ships.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &ShipDef)> {
        self.ships.iter().enumerate()
    }

    /// Sum of all registered ship lengths.
    pub fn total_length(&self) -> i32 {
        self.ships.iter().map(ShipDef::length).sum()
    }
}

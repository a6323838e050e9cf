//! Board state: per-cell occupancy and shot marks for one side.
//!
//! The grid is the only record of where ships are and which of them are
//! still afloat; nothing else is cached, so ship integrity is always
//! answered by scanning the cells.

use core::fmt;
use rand::Rng;

use crate::common::{AttackResult, BoardError, Point};
use crate::config::{Dimensions, BLOCK_PROBABILITY, EMPTY_SYMBOL, HIT_SYMBOL, MAX_COLS, MAX_ROWS, MISS_SYMBOL};
use crate::fleet::Fleet;
use crate::ship::{footprint, Orientation, ShipId};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Temporary obstacle used only while searching for a placement.
    Blocked,
    Occupied(ShipId),
    Hit(ShipId),
    Miss,
}

type Grid = [[Cell; MAX_COLS]; MAX_ROWS];

/// Copyable snapshot of every cell, for comparing boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub dims: Dimensions,
    pub cells: Grid,
}

pub struct Board<'a> {
    fleet: &'a Fleet,
    dims: Dimensions,
    cells: Grid,
}

impl<'a> Board<'a> {
    /// Create an empty board sized for `fleet`.
    pub fn new(fleet: &'a Fleet) -> Self {
        Board {
            fleet,
            dims: fleet.dims(),
            cells: [[Cell::Empty; MAX_COLS]; MAX_ROWS],
        }
    }

    pub fn fleet(&self) -> &'a Fleet {
        self.fleet
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Cell at `p`, or `None` when out of bounds.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if self.dims.contains(p) {
            Some(self.cells[p.row as usize][p.col as usize])
        } else {
            None
        }
    }

    fn set(&mut self, p: Point, cell: Cell) {
        self.cells[p.row as usize][p.col as usize] = cell;
    }

    fn in_bounds(&self) -> impl Iterator<Item = &Cell> {
        let cols = self.dims.cols() as usize;
        self.cells[..self.dims.rows() as usize]
            .iter()
            .flat_map(move |row| row[..cols].iter())
    }

    fn in_bounds_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        let cols = self.dims.cols() as usize;
        self.cells[..self.dims.rows() as usize]
            .iter_mut()
            .flat_map(move |row| row[..cols].iter_mut())
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.in_bounds_mut().for_each(|c| *c = Cell::Empty);
    }

    /// Block each empty cell with probability 1/2.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.block_with(rng, BLOCK_PROBABILITY);
    }

    /// Block each empty cell with the given probability. Values outside
    /// `(0, 1]` block nothing or everything.
    pub fn block_with<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) {
        if !(probability > 0.0) {
            return;
        }
        let probability = probability.min(1.0);
        for cell in self.in_bounds_mut() {
            if *cell == Cell::Empty && rng.random_bool(probability) {
                *cell = Cell::Blocked;
            }
        }
    }

    /// Turn every blocked cell back into an empty one.
    pub fn unblock(&mut self) {
        for cell in self.in_bounds_mut() {
            if *cell == Cell::Blocked {
                *cell = Cell::Empty;
            }
        }
    }

    /// Block cells, run `f`, and unblock again whatever `f` returns.
    pub fn with_obstacles<R, F, T>(&mut self, rng: &mut R, probability: f64, f: F) -> T
    where
        R: Rng + ?Sized,
        F: FnOnce(&mut Self) -> T,
    {
        self.block_with(rng, probability);
        let out = f(self);
        self.unblock();
        out
    }

    /// `true` if any cell still carries the ship, hit or not.
    pub fn is_placed(&self, id: ShipId) -> bool {
        self.in_bounds()
            .any(|c| matches!(*c, Cell::Occupied(s) | Cell::Hit(s) if s == id))
    }

    fn ship_length(&self, id: ShipId) -> Result<i32, BoardError> {
        self.fleet
            .get(id)
            .map(|def| def.length())
            .ok_or(BoardError::InvalidShipId(id))
    }

    /// Place ship `id` with its top or left end at `origin`.
    ///
    /// Every cell of the footprint must be in bounds and empty, and the ship
    /// must not already be on the board. On error nothing is modified.
    pub fn place_ship(
        &mut self,
        origin: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let length = self.ship_length(id)?;
        if !self.dims.contains(origin) {
            return Err(BoardError::OutOfBounds(origin));
        }
        for p in footprint(origin, orientation, length) {
            match self.cell(p) {
                None => return Err(BoardError::OutOfBounds(p)),
                Some(Cell::Empty) => {}
                Some(_) => return Err(BoardError::Overlaps(p)),
            }
        }
        if self.is_placed(id) {
            return Err(BoardError::AlreadyPlaced(id));
        }
        for p in footprint(origin, orientation, length) {
            self.set(p, Cell::Occupied(id));
        }
        Ok(())
    }

    /// Remove ship `id` from exactly the footprint it was placed with.
    pub fn unplace_ship(
        &mut self,
        origin: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let length = self.ship_length(id)?;
        for p in footprint(origin, orientation, length) {
            match self.cell(p) {
                None => return Err(BoardError::OutOfBounds(p)),
                Some(Cell::Occupied(s)) if s == id => {}
                Some(_) => return Err(BoardError::NotPlaced(id)),
            }
        }
        for p in footprint(origin, orientation, length) {
            self.set(p, Cell::Empty);
        }
        Ok(())
    }

    /// Place a ship, run `f`, and take the ship back off unless `f` reports
    /// success. Returns whether the placement was kept.
    pub fn with_ship<F>(
        &mut self,
        origin: Point,
        id: ShipId,
        orientation: Orientation,
        f: F,
    ) -> Result<bool, BoardError>
    where
        F: FnOnce(&mut Self) -> bool,
    {
        self.place_ship(origin, id, orientation)?;
        let keep = f(self);
        if !keep {
            self.unplace_ship(origin, id, orientation)?;
        }
        Ok(keep)
    }

    /// Fire at `p`.
    pub fn attack(&mut self, p: Point) -> Result<AttackResult, BoardError> {
        let cell = self.cell(p).ok_or(BoardError::OutOfBounds(p))?;
        match cell {
            Cell::Hit(_) | Cell::Miss => Err(BoardError::AlreadyAttacked(p)),
            Cell::Empty | Cell::Blocked => {
                self.set(p, Cell::Miss);
                Ok(AttackResult::Miss)
            }
            Cell::Occupied(id) => {
                self.set(p, Cell::Hit(id));
                let afloat = self.in_bounds().any(|c| *c == Cell::Occupied(id));
                if afloat {
                    Ok(AttackResult::Hit(id))
                } else {
                    Ok(AttackResult::Sunk(id))
                }
            }
        }
    }

    /// `true` once no intact ship cell remains.
    pub fn all_ships_destroyed(&self) -> bool {
        !self.in_bounds().any(|c| matches!(c, Cell::Occupied(_)))
    }

    /// Printable view of the board. With `shots_only` ship positions are
    /// hidden and only hits and misses show.
    pub fn render(&self, shots_only: bool) -> BoardView<'_, 'a> {
        BoardView {
            board: self,
            shots_only,
        }
    }

    fn symbol_at(&self, p: Point, shots_only: bool) -> char {
        match self.cell(p) {
            Some(Cell::Hit(_)) => HIT_SYMBOL,
            Some(Cell::Miss) => MISS_SYMBOL,
            Some(Cell::Occupied(id)) if !shots_only => self
                .fleet
                .get(id)
                .map_or(EMPTY_SYMBOL, |def| def.symbol()),
            _ => EMPTY_SYMBOL,
        }
    }
}

/// Text rendering of a board: a header of column digits followed by one
/// line per row.
pub struct BoardView<'b, 'a> {
    board: &'b Board<'a>,
    shots_only: bool,
}

impl fmt::Display for BoardView<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.board.dims();
        write!(f, "  ")?;
        for c in 0..dims.cols() {
            write!(f, "{}", c)?;
        }
        writeln!(f)?;
        for r in 0..dims.rows() {
            write!(f, "{} ", r)?;
            for c in 0..dims.cols() {
                write!(f, "{}", self.board.symbol_at(Point::new(r, c), self.shots_only))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ dims: {:?}, ships: {} }}", self.dims, self.fleet.len())?;
        write!(f, "{}", self.render(false))
    }
}

impl From<&Board<'_>> for BoardState {
    fn from(b: &Board<'_>) -> Self {
        BoardState {
            dims: b.dims,
            cells: b.cells,
        }
    }
}

use alloc::string::String;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Point};
use crate::config::Dimensions;
use crate::fleet::Fleet;
use crate::ship::Orientation;

use super::Player;

/// Baseline opponent: ship k goes at row k, column 0, and shots walk
/// backward through the board one cell at a time, wrapping around.
pub struct AwfulPlayer {
    name: String,
    dims: Dimensions,
    ships: usize,
    last: Point,
}

impl AwfulPlayer {
    pub fn new(name: &str, fleet: &Fleet) -> Self {
        Self {
            name: name.into(),
            dims: fleet.dims(),
            ships: fleet.len(),
            last: Point::new(0, 0),
        }
    }
}

impl Player for AwfulPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError> {
        for id in 0..self.ships {
            board.place_ship(Point::new(id as i32, 0), id, Orientation::Horizontal)?;
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Option<Point> {
        if self.last.col > 0 {
            self.last.col -= 1;
        } else {
            self.last.col = self.dims.cols() - 1;
            if self.last.row > 0 {
                self.last.row -= 1;
            } else {
                self.last.row = self.dims.rows() - 1;
            }
        }
        Some(self.last)
    }
}

use rand::Rng;

use crate::common::{ConfigError, Point};

pub const MAX_ROWS: usize = 10;
pub const MAX_COLS: usize = 10;

pub const EMPTY_SYMBOL: char = '.';
pub const HIT_SYMBOL: char = 'X';
pub const MISS_SYMBOL: char = 'o';
pub const RESERVED_SYMBOLS: [char; 3] = [EMPTY_SYMBOL, HIT_SYMBOL, MISS_SYMBOL];

/// Outer retry budget of the backtracking placement search.
pub const PLACEMENT_ATTEMPTS: usize = 50;
/// Chance that `Board::block` marks a given empty cell.
pub const BLOCK_PROBABILITY: f64 = 0.5;
/// How far from an anchoring hit the exploit sweep reaches.
pub const EXPLOIT_RADIUS: i32 = 4;

/// Classic fleet: (length, symbol, name).
pub const STANDARD_SHIPS: [(i32, char, &str); 5] = [
    (5, 'A', "aircraft carrier"),
    (4, 'B', "battleship"),
    (3, 'D', "destroyer"),
    (3, 'S', "submarine"),
    (2, 'P', "patrol boat"),
];

/// Validated board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: i32,
    cols: i32,
}

impl Dimensions {
    pub fn new(rows: i32, cols: i32) -> Result<Self, ConfigError> {
        if rows < 1 || rows > MAX_ROWS as i32 || cols < 1 || cols > MAX_COLS as i32 {
            return Err(ConfigError::BadDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn cell_count(&self) -> i32 {
        self.rows * self.cols
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Uniformly random in-bounds point.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(0..self.rows),
            rng.random_range(0..self.cols),
        )
    }

    /// The cell after `p` in row-major order; the result is past the last
    /// row once the scan wraps off the final cell.
    pub fn next_row_major(&self, p: Point) -> Point {
        if p.col + 1 >= self.cols {
            Point::new(p.row + 1, 0)
        } else {
            Point::new(p.row, p.col + 1)
        }
    }

    /// Every in-bounds point, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Point::new(r, c)))
    }
}

/// Tunables for the backtracking placement search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    pub attempts: usize,
    pub block_probability: f64,
}

impl PlacementConfig {
    /// Search without random obstacles; used where a deterministic layout is wanted.
    pub const fn unblocked() -> Self {
        Self {
            attempts: 1,
            block_probability: 0.0,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            attempts: PLACEMENT_ATTEMPTS,
            block_probability: BLOCK_PROBABILITY,
        }
    }
}

//! Hunt/target attack strategy.
//!
//! Fires at random unexplored cells until something is hit, then sweeps the
//! row and column through the anchoring hit until the ship goes down or the
//! neighbourhood is exhausted.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{AttackResult, Point};
use crate::config::{Dimensions, EXPLOIT_RADIUS, MAX_COLS, MAX_ROWS};

const SIDE: usize = if MAX_ROWS > MAX_COLS { MAX_ROWS } else { MAX_COLS };

/// Memory of every cell this strategy has fired at.
type Targeted = BitBoard<u128, SIDE>;

/// Which hit the exploit sweep is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Stay on the hit that started exploitation, even after further hits.
    /// Any hit while searching starts exploitation, sinking or not.
    FirstHit,
    /// Re-centre on every new hit. A shot that sinks a ship while
    /// searching leaves the search running.
    LatestHit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Searching,
    Exploiting { anchor: Point },
}

#[derive(Debug, Clone)]
pub struct HuntTarget {
    dims: Dimensions,
    targeted: Targeted,
    mode: Mode,
    anchor: Anchor,
}

impl HuntTarget {
    pub fn new(dims: Dimensions, anchor: Anchor) -> Self {
        Self {
            dims,
            targeted: Targeted::new(),
            mode: Mode::Searching,
            anchor,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_targeted(&self, p: Point) -> bool {
        self.targeted.get(p)
    }

    /// Number of in-bounds cells not yet fired at.
    pub fn remaining(&self) -> usize {
        self.dims.cell_count() as usize - self.targeted.count_ones()
    }

    /// Next cell to fire at, or `None` once every cell has been targeted.
    pub fn recommend<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Point> {
        let pick = match self.mode {
            Mode::Searching => self.random_untargeted(rng),
            Mode::Exploiting { anchor } => match self.sweep(anchor) {
                Some(p) => Some(p),
                None => {
                    log::debug!("nothing left to probe around {}, searching again", anchor);
                    self.mode = Mode::Searching;
                    self.random_untargeted(rng)
                }
            },
        };
        if let Some(p) = pick {
            self.targeted.set(p);
        }
        pick
    }

    /// First untargeted cell along the anchor's row, then its column,
    /// walking offsets from +radius down to -radius.
    fn sweep(&self, anchor: Point) -> Option<Point> {
        let offsets = || (-EXPLOIT_RADIUS..=EXPLOIT_RADIUS).rev();
        offsets()
            .map(|d| anchor.offset(0, d))
            .chain(offsets().map(|d| anchor.offset(d, 0)))
            .find(|&p| self.dims.contains(p) && !self.targeted.get(p))
    }

    fn random_untargeted<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point> {
        let open = self.remaining();
        if open == 0 {
            return None;
        }
        let k = rng.random_range(0..open);
        self.dims.points().filter(|&p| !self.targeted.get(p)).nth(k)
    }

    /// Update the mode from the outcome of a shot at `p`; `None` means the
    /// shot was rejected by the board.
    pub fn record(&mut self, p: Point, result: Option<AttackResult>) {
        if self.dims.contains(p) {
            self.targeted.set(p);
        }
        let Some(result) = result else {
            return;
        };
        self.mode = match (self.mode, result) {
            (Mode::Searching, AttackResult::Hit(_)) => {
                log::debug!("hit at {}, exploiting", p);
                Mode::Exploiting { anchor: p }
            }
            // first-hit counts a sinking shot as a hit
            (Mode::Searching, AttackResult::Sunk(_)) if self.anchor == Anchor::FirstHit => {
                log::debug!("sinking hit at {}, exploiting", p);
                Mode::Exploiting { anchor: p }
            }
            (Mode::Exploiting { .. }, AttackResult::Sunk(_)) => {
                log::debug!("target sunk at {}, searching", p);
                Mode::Searching
            }
            (Mode::Exploiting { .. }, AttackResult::Hit(_)) if self.anchor == Anchor::LatestHit => {
                Mode::Exploiting { anchor: p }
            }
            (mode, _) => mode,
        };
    }
}

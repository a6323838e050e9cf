//! Backtracking fleet placement.
//!
//! Each attempt scatters random obstacles over the board and then packs the
//! fleet in ship order, scanning origins row by row. Obstacles make
//! successive attempts land in different layouts; they are always removed
//! before returning.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Point};
use crate::config::PlacementConfig;
use crate::ship::{Orientation, ShipId};

/// Place the whole fleet, retrying with fresh obstacles up to
/// `config.attempts` times.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board<'_>,
    rng: &mut R,
    config: PlacementConfig,
) -> Result<(), BoardError> {
    for attempt in 1..=config.attempts {
        let placed = board.with_obstacles(rng, config.block_probability, |b| {
            place_from(b, 0, Point::new(0, 0))
        });
        if placed {
            log::debug!("fleet placed on attempt {}", attempt);
            return Ok(());
        }
        log::debug!("placement attempt {} failed", attempt);
    }
    log::warn!(
        "could not place {} ships after {} attempts",
        board.fleet().len(),
        config.attempts
    );
    Err(BoardError::PlacementExhausted)
}

/// Place ships `ship..` starting the scan at `at`.
///
/// On entry and on a `false` return the board holds exactly ships
/// `0..ship`; every placement tried below is rolled back before the search
/// moves on.
pub fn place_from(board: &mut Board<'_>, ship: ShipId, at: Point) -> bool {
    if ship >= board.fleet().len() {
        return true;
    }
    if !board.dims().contains(at) {
        return false;
    }
    for orientation in Orientation::ALL {
        let kept = board.with_ship(at, ship, orientation, |b| place_from(b, ship + 1, at));
        if let Ok(true) = kept {
            return true;
        }
    }
    let next = board.dims().next_row_major(at);
    place_from(board, ship, next)
}

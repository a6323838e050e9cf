use alloc::string::String;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackResult, BoardError, Point};
use crate::config::PlacementConfig;
use crate::fleet::Fleet;
use crate::hunt::{Anchor, HuntTarget};
use crate::placement;

use super::Player;

/// Computer player that packs its fleet by backtracking search and fires
/// with the hunt/target strategy.
pub struct HunterPlayer {
    name: String,
    placement: PlacementConfig,
    hunt: HuntTarget,
}

impl HunterPlayer {
    pub fn new(name: &str, fleet: &Fleet, anchor: Anchor) -> Self {
        Self {
            name: name.into(),
            placement: PlacementConfig::default(),
            hunt: HuntTarget::new(fleet.dims(), anchor),
        }
    }

    /// Override the placement search settings.
    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    pub fn hunt(&self) -> &HuntTarget {
        &self.hunt
    }
}

impl Player for HunterPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError> {
        placement::place_fleet(board, rng, self.placement)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Option<Point> {
        self.hunt.recommend(rng)
    }

    fn record_attack_result(&mut self, point: Point, result: Option<AttackResult>) {
        self.hunt.record(point, result);
    }
}

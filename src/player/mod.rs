//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AwfulPlayer: stacks its ships in the first column and fires backward
//!   through the board
//! - HunterPlayer: backtracking placement plus hunt/target attacks
//! - HumanPlayer: reads placements and shots from a line-based reader

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackResult, BoardError, Point};
use crate::fleet::Fleet;
use crate::hunt::Anchor;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its fleet on its own board
/// - Choosing where to fire
/// - Digesting the outcome of its own shots and those of the opponent
pub trait Player {
    fn name(&self) -> &str;

    /// Humans get the shots-only view of the opponent's board.
    fn is_human(&self) -> bool {
        false
    }

    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError>;

    /// Choose the next target. `None` means the player has nothing left to
    /// fire at and concedes.
    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Option<Point>;

    /// Outcome of the player's last shot; `None` if the board rejected it.
    fn record_attack_result(&mut self, _point: Point, _result: Option<AttackResult>) {}

    /// The opponent fired at `point` on this player's board.
    fn record_opponent_attack(&mut self, _point: Point) {}
}

pub mod awful;
pub use awful::AwfulPlayer;

pub mod hunter;
pub use hunter::HunterPlayer;

#[cfg(feature = "std")]
pub mod human;
#[cfg(feature = "std")]
pub use human::HumanPlayer;

/// Strategies selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PlayerKind {
    Human,
    Awful,
    Mediocre,
    Good,
}

impl PlayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Awful => "awful",
            PlayerKind::Mediocre => "mediocre",
            PlayerKind::Good => "good",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a strategy name that matches no [`PlayerKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlayerKind;

impl fmt::Display for UnknownPlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected one of human, awful, mediocre, good")
    }
}

impl FromStr for PlayerKind {
    type Err = UnknownPlayerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "awful" => Ok(PlayerKind::Awful),
            "mediocre" => Ok(PlayerKind::Mediocre),
            "good" => Ok(PlayerKind::Good),
            _ => Err(UnknownPlayerKind),
        }
    }
}

/// Build a player of the named kind. Returns `None` for unknown names and,
/// without the `std` feature, for humans.
pub fn create_player<'a>(kind: &str, name: &str, fleet: &'a Fleet) -> Option<Box<dyn Player + 'a>> {
    let kind: PlayerKind = kind.parse().ok()?;
    match kind {
        #[cfg(feature = "std")]
        PlayerKind::Human => Some(Box::new(HumanPlayer::stdio(name, fleet))),
        #[cfg(not(feature = "std"))]
        PlayerKind::Human => None,
        PlayerKind::Awful => Some(Box::new(AwfulPlayer::new(name, fleet))),
        PlayerKind::Mediocre => Some(Box::new(HunterPlayer::new(name, fleet, Anchor::FirstHit))),
        PlayerKind::Good => Some(Box::new(HunterPlayer::new(name, fleet, Anchor::LatestHit))),
    }
}

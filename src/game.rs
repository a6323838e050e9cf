//! Turn orchestration: setup of both fleets, then alternating half-turns
//! until one fleet is gone.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackResult, BoardError, ConfigError, Point};
use crate::fleet::Fleet;
use crate::player::Player;

/// One of the two sides of a match. `First` fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// `winner` sank the opposing fleet, or the opponent ran out of shots
    /// (`by_forfeit`).
    Won {
        winner: Side,
        half_turns: usize,
        by_forfeit: bool,
    },
    /// `side` could not place its fleet; no shot was fired.
    NoWinner { side: Side, error: BoardError },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Side> {
        match *self {
            GameOutcome::Won { winner, .. } => Some(winner),
            GameOutcome::NoWinner { .. } => None,
        }
    }
}

/// Hooks for watching a game. Every method defaults to doing nothing.
pub trait GameObserver {
    /// `attacker` is about to fire at `board`, which belongs to `defender`.
    fn turn_started(&mut self, _attacker: &dyn Player, _defender: &dyn Player, _board: &Board<'_>) {}

    /// A shot at `point` was resolved; `board` is the defender's board
    /// after the shot.
    fn attack_resolved(
        &mut self,
        _attacker: &dyn Player,
        _point: Point,
        _outcome: &Result<AttackResult, BoardError>,
        _board: &Board<'_>,
    ) {
    }

    /// `attacker` had nothing left to fire at.
    fn forfeited(&mut self, _attacker: &dyn Player) {}

    fn game_over(&mut self, _winner: &dyn Player, _loser: &dyn Player, _loser_board: &Board<'_>) {}
}

/// Observer that ignores everything.
pub struct Silent;

impl GameObserver for Silent {}

/// A match between two players over a shared fleet definition.
pub struct Game<'a> {
    fleet: &'a Fleet,
}

impl<'a> Game<'a> {
    pub fn new(fleet: &'a Fleet) -> Result<Self, ConfigError> {
        if fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        Ok(Self { fleet })
    }

    pub fn fleet(&self) -> &'a Fleet {
        self.fleet
    }

    /// Play a full game. Each side places its fleet on a fresh board, then
    /// the sides alternate single shots starting with `first`. The game
    /// stops the moment a fleet is destroyed.
    pub fn play<'p>(
        &self,
        first: &mut (dyn Player + 'p),
        second: &mut (dyn Player + 'p),
        rng: &mut SmallRng,
        observer: &mut dyn GameObserver,
    ) -> GameOutcome {
        let mut first_board = Board::new(self.fleet);
        let mut second_board = Board::new(self.fleet);

        if let Err(error) = first.place_ships(rng, &mut first_board) {
            log::warn!("{} could not place ships: {}", first.name(), error);
            return GameOutcome::NoWinner { side: Side::First, error };
        }
        if let Err(error) = second.place_ships(rng, &mut second_board) {
            log::warn!("{} could not place ships: {}", second.name(), error);
            return GameOutcome::NoWinner { side: Side::Second, error };
        }
        log::info!("{} vs {}: fleets placed", first.name(), second.name());

        let mut attacker = Side::First;
        let mut half_turns = 0;
        loop {
            half_turns += 1;
            let (a, d, board) = match attacker {
                Side::First => (&mut *first, &mut *second, &mut second_board),
                Side::Second => (&mut *second, &mut *first, &mut first_board),
            };

            observer.turn_started(&*a, &*d, board);
            let Some(point) = a.recommend_attack(rng) else {
                log::warn!("{} has nothing left to fire at and forfeits", a.name());
                observer.forfeited(&*a);
                return GameOutcome::Won {
                    winner: attacker.other(),
                    half_turns,
                    by_forfeit: true,
                };
            };

            let outcome = board.attack(point);
            log::debug!("{} fires at {}: {:?}", a.name(), point, outcome);
            a.record_attack_result(point, outcome.ok());
            d.record_opponent_attack(point);
            observer.attack_resolved(&*a, point, &outcome, board);

            if board.all_ships_destroyed() {
                log::info!("{} wins after {} half-turns", a.name(), half_turns);
                observer.game_over(&*a, &*d, board);
                return GameOutcome::Won {
                    winner: attacker,
                    half_turns,
                    by_forfeit: false,
                };
            }
            attacker = attacker.other();
        }
    }
}

//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: scripted opponent that fires at random untargeted cells
//! - CliPlayer: interactive command-line player
//!
//! [`take_turn`] drives one player through a single move, retrying rejected
//! targets until the opponent's board accepts one.

use log::debug;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, GameError, PlayerError, ShotResult},
    coord::Coordinate,
};

/// What a player may look at when choosing a target.
#[derive(Clone, Copy)]
pub struct TurnView<'a> {
    /// The player's own board.
    pub own: &'a Board,
    /// The board being shot at.
    pub opponent: &'a Board,
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets to attack
/// - Handling feedback from its own and the opponent's shots
pub trait Player {
    /// Short display name used in messages and logs.
    fn name(&self) -> &str;

    /// Choose the next target coordinate.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: TurnView<'_>,
    ) -> Result<Coordinate, PlayerError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) {}

    /// Inform the player that the board refused its last target.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _result: ShotResult) {}

    /// Rejected shots in a row this player may make before its turn fails.
    /// `None` keeps asking forever.
    fn rejection_limit(&self, configured: usize) -> Option<usize> {
        Some(configured)
    }
}

/// Outcome of one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub target: Coordinate,
    pub result: ShotResult,
    /// The shooter moves again.
    pub repeat: bool,
}

/// Let `player` fire at `opponent` until a shot is accepted.
///
/// Off-grid and already-targeted coordinates are reported back to the player
/// and it is asked again. With `Some(limit)`, the turn fails with
/// [`GameError::TooManyRejectedShots`] after `limit` rejections in a row.
pub fn take_turn(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    own: &Board,
    opponent: &mut Board,
    retry_limit: Option<usize>,
) -> Result<TurnOutcome, GameError> {
    let mut rejected = 0;
    loop {
        let view = TurnView {
            own,
            opponent: &*opponent,
        };
        let target = player.select_target(rng, view)?;
        match opponent.receive_shot(target) {
            Ok(result) => {
                debug!("{} fired at {}: {:?}", player.name(), target, result);
                player.handle_shot_result(target, result);
                return Ok(TurnOutcome {
                    target,
                    result,
                    repeat: result.grants_extra_turn(),
                });
            }
            Err(e) if e.is_retryable_shot() => {
                rejected += 1;
                debug!("{} shot rejected ({}): {}", player.name(), rejected, e);
                player.handle_rejected_shot(target, &e);
                if retry_limit.is_some_and(|limit| rejected >= limit) {
                    return Err(GameError::TooManyRejectedShots { attempts: rejected });
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

// Re-export implementations
pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;

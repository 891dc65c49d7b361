use log::debug;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng};

use crate::{common::PlayerError, coord::Coordinate};

use super::{Player, TurnView};

/// Scripted opponent that fires at uniformly random cells it has not tried yet.
///
/// The candidate list holds every cell of the grid, shuffled once when the
/// player is created. Each pick removes its cell, so the same coordinate is
/// never offered twice even before the board's own repeat check.
pub struct AiPlayer {
    remaining: Vec<Coordinate>,
}

impl AiPlayer {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut remaining: Vec<Coordinate> = Coordinate::all().collect();
        remaining.shuffle(rng);
        Self { remaining }
    }

    /// Cells not yet targeted.
    pub fn remaining(&self) -> &[Coordinate] {
        &self.remaining
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "Computer"
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _view: TurnView<'_>,
    ) -> Result<Coordinate, PlayerError> {
        if self.remaining.is_empty() {
            return Err(PlayerError::NoTargetsLeft);
        }
        let idx = rng.random_range(0..self.remaining.len());
        let target = self.remaining.swap_remove(idx);
        debug!("computer picks {} ({} left)", target, self.remaining.len());
        Ok(target)
    }
}

//! Match orchestration: fleet setup, turn order and the win condition.

use log::{info, warn};
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::{
    board::Board,
    common::{GameError, ShotResult},
    config::{MatchConfig, NUM_VESSELS},
    coord::Coordinate,
    player::{take_turn, Player},
};

/// One of the two sides of a match. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Boards are not populated yet.
    Setup,
    Playing,
    /// Carries the winner.
    Finished(Side),
}

/// One accepted shot, as reported by [`Match::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub side: Side,
    pub target: Coordinate,
    pub result: ShotResult,
    /// The same side moves next.
    pub repeat: bool,
}

/// End-of-match figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub winner: Side,
    /// Accepted shots per side.
    pub shots: [usize; 2],
    /// Vessels lost per side.
    pub sunk: [usize; 2],
}

/// A single game between two players, each owning one board.
pub struct Match {
    config: MatchConfig,
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    state: MatchState,
    turn: Side,
    shots: [usize; 2],
}

impl Match {
    /// Create a match in the [`MatchState::Setup`] phase.
    pub fn new(players: [Box<dyn Player>; 2], config: MatchConfig) -> Self {
        Self {
            config,
            players,
            boards: [Board::new(), Board::new()],
            state: MatchState::Setup,
            turn: Side::First,
            shots: [0; 2],
        }
    }

    /// Create a match that skips random placement and starts on the given
    /// boards. Boards that are not armed yet get armed here.
    pub fn with_boards(
        players: [Box<dyn Player>; 2],
        mut boards: [Board; 2],
        config: MatchConfig,
    ) -> Self {
        for board in boards.iter_mut() {
            if !board.is_armed() {
                board.reset_used_tracking();
            }
        }
        Self {
            config,
            players,
            boards,
            state: MatchState::Playing,
            turn: Side::First,
            shots: [0; 2],
        }
    }

    /// Place both fleets at random and start play. The second side's board
    /// is hidden.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        if self.state != MatchState::Setup {
            warn!("setup requested in state {:?}; ignoring", self.state);
            return Ok(());
        }
        for side in [Side::First, Side::Second] {
            let board = Board::random(rng, &self.config.placement)?;
            self.boards[side.index()] = board;
        }
        self.boards[Side::Second.index()].set_hidden(true);
        self.state = MatchState::Playing;
        info!("fleets placed, {} moves first", self.players[0].name());
        Ok(())
    }

    /// Play one accepted shot for the side whose turn it is.
    ///
    /// Runs [`Match::setup`] first if needed. A hit or sinking keeps the
    /// turn; a miss passes it.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<MoveRecord, GameError> {
        match self.state {
            MatchState::Setup => self.setup(rng)?,
            MatchState::Finished(_) => return Err(GameError::AlreadyFinished),
            MatchState::Playing => {}
        }

        let side = self.turn;
        let (first, second) = self.boards.split_at_mut(1);
        let (own, opponent) = match side {
            Side::First => (&first[0], &mut second[0]),
            Side::Second => (&second[0], &mut first[0]),
        };
        let player = self.players[side.index()].as_mut();
        let limit = player.rejection_limit(self.config.shot_retry_limit);
        let outcome = take_turn(player, rng, own, opponent, limit)?;
        self.shots[side.index()] += 1;
        self.players[side.opponent().index()].handle_opponent_shot(outcome.target, outcome.result);

        for loser in [Side::First, Side::Second] {
            if self.boards[loser.index()].sunk_count() >= NUM_VESSELS {
                let winner = loser.opponent();
                info!(
                    "{} wins after {} shots",
                    self.players[winner.index()].name(),
                    self.shots[winner.index()]
                );
                self.state = MatchState::Finished(winner);
                break;
            }
        }
        if !outcome.repeat {
            self.turn = side.opponent();
        }

        Ok(MoveRecord {
            side,
            target: outcome.target,
            result: outcome.result,
            repeat: outcome.repeat,
        })
    }

    /// Play until one side has lost its whole fleet and return the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<Side, GameError> {
        loop {
            if let MatchState::Finished(winner) = self.state {
                return Ok(winner);
            }
            self.step(rng)?;
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished(winner) => Some(winner),
            _ => None,
        }
    }

    /// Side that makes the next move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        self.players[side.index()].as_ref()
    }

    /// Accepted shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Figures for a finished match, `None` while it is still running.
    pub fn summary(&self) -> Option<MatchSummary> {
        let winner = self.winner()?;
        Some(MatchSummary {
            winner,
            shots: self.shots,
            sunk: [self.boards[0].sunk_count(), self.boards[1].sunk_count()],
        })
    }
}

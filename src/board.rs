//! Game board state: vessel placement with exclusion buffers and shot resolution.

use core::fmt;

use log::{debug, info, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, PlacementFault, ShotResult};
use crate::config::{PlacementConfig, BOARD_SIZE, FLEET};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Vessel};

type BB = BitBoard<u64, BOARD_SIZE>;

/// What a single grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water nobody has shot at.
    Empty,
    /// An intact vessel segment.
    Ship,
    /// A vessel segment that has been hit.
    Hit,
    /// A shot that landed in open water.
    Miss,
    /// Water next to a sunk vessel; it cannot hold a ship and cannot be shot.
    Blocked,
}

/// One side's grid, its vessels and the bookkeeping for placement and shots.
///
/// The *used* set serves two phases. While vessels are placed it holds every
/// occupied cell plus the ring around each vessel, so vessels never touch.
/// [`Board::reset_used_tracking`] clears it once placement is done; from then
/// on it holds every cell that was shot at or blocked around a sunk vessel.
#[derive(Clone)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    vessels: Vec<Vessel>,
    used: BB,
    ship_map: BB,
    sunk: usize,
    hidden: bool,
    armed: bool,
}

impl Board {
    /// Create an empty, visible board with no vessels.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            vessels: Vec::new(),
            used: BB::new(),
            ship_map: BB::new(),
            sunk: 0,
            hidden: false,
            armed: false,
        }
    }

    /// Build an armed board holding the standard fleet at random positions.
    ///
    /// Each board attempt gets `attempts_per_board` tries at random bows and
    /// orientations. A board that runs out is wiped and started over, up to
    /// `max_board_restarts` times.
    pub fn random<R: Rng>(rng: &mut R, config: &PlacementConfig) -> Result<Self, BoardError> {
        for restart in 0..=config.max_board_restarts {
            if let Some(mut board) = Self::try_fill_fleet(rng, config.attempts_per_board) {
                board.reset_used_tracking();
                info!("fleet placed after {} board restart(s)", restart);
                return Ok(board);
            }
            warn!(
                "fleet placement exceeded {} attempts, restarting board",
                config.attempts_per_board
            );
        }
        Err(BoardError::PlacementExhausted {
            restarts: config.max_board_restarts,
        })
    }

    fn try_fill_fleet<R: Rng>(rng: &mut R, attempt_limit: usize) -> Option<Self> {
        let mut board = Board::new();
        let mut attempts = 0;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > attempt_limit {
                    return None;
                }
                let bow = Coordinate::new(
                    rng.random_range(0..BOARD_SIZE),
                    rng.random_range(0..BOARD_SIZE),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match board.place_vessel(Vessel::new(bow, length, orientation)) {
                    Ok(()) => break,
                    Err(e) => debug!("placement attempt {} rejected: {}", attempts, e),
                }
            }
        }
        Some(board)
    }

    /// Place a vessel if every segment is on the grid and unused.
    ///
    /// On success the ring of cells around the vessel is added to the used
    /// set as well, so no later vessel may touch this one.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if self.armed {
            return Err(BoardError::PlacementClosed);
        }
        let coords = vessel.coordinates();
        for &at in &coords {
            if !at.in_bounds() {
                return Err(BoardError::InvalidPlacement {
                    at,
                    fault: PlacementFault::OutOfBounds,
                });
            }
            if self.used.contains(at) {
                return Err(BoardError::InvalidPlacement {
                    at,
                    fault: PlacementFault::Used,
                });
            }
        }
        for &at in &coords {
            self.cells[at.row][at.col] = Cell::Ship;
            self.used.insert(at)?;
            self.ship_map.insert(at)?;
        }
        self.vessels.push(vessel);
        self.mark_buffer(&coords, false);
        Ok(())
    }

    /// Forget placement bookkeeping and start tracking shots.
    ///
    /// Must be called once, after the last vessel is placed and before the
    /// first shot. Later calls are ignored so that recorded shots survive.
    pub fn reset_used_tracking(&mut self) {
        if self.armed {
            warn!("used tracking already reset; ignoring");
            return;
        }
        self.used.clear();
        self.armed = true;
    }

    /// Resolve a shot at `target`.
    pub fn receive_shot(&mut self, target: Coordinate) -> Result<ShotResult, BoardError> {
        if !target.in_bounds() {
            return Err(BoardError::OutOfBounds(target));
        }
        if self.used.contains(target) {
            return Err(BoardError::AlreadyTargeted(target));
        }
        self.used.insert(target)?;

        let Some(idx) = self.vessels.iter().position(|v| v.is_hit_by(target)) else {
            self.cells[target.row][target.col] = Cell::Miss;
            debug!("shot at {}: miss", target);
            return Ok(ShotResult::Miss);
        };

        self.cells[target.row][target.col] = Cell::Hit;
        let vessel = &mut self.vessels[idx];
        if vessel.take_hit() {
            self.sunk += 1;
            let coords = vessel.coordinates();
            self.mark_buffer(&coords, true);
            debug!("shot at {}: vessel sunk ({} total)", target, self.sunk);
            Ok(ShotResult::Sunk)
        } else {
            debug!("shot at {}: hit", target);
            Ok(ShotResult::Hit)
        }
    }

    /// Add the unused neighbours of `coords` to the used set; `visible` also
    /// turns them into [`Cell::Blocked`].
    fn mark_buffer(&mut self, coords: &[Coordinate], visible: bool) {
        for at in coords.iter().flat_map(|c| c.neighbours()) {
            if self.used.contains(at) {
                continue;
            }
            if self.used.insert(at).is_ok() && visible {
                self.cells[at.row][at.col] = Cell::Blocked;
            }
        }
    }

    /// State of the cell at `at`, or `None` off the grid.
    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        if at.in_bounds() {
            Some(self.cells[at.row][at.col])
        } else {
            None
        }
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` once there is at least one vessel and every one is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.sunk == self.vessels.len()
    }

    /// Vessel segments not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.vessels.iter().map(Vessel::hit_points).sum()
    }

    /// Whether `at` is excluded from placement (before arming) or from
    /// shooting (after).
    pub fn is_used(&self, at: Coordinate) -> bool {
        self.used.contains(at)
    }

    /// Whether shots are being tracked, i.e. placement is over.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Hidden boards do not reveal intact vessels when rendered.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Occupancy mask of all vessels.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  used: {:?},\n  sunk: {},\n  armed: {},\n  vessels: {:?}\n}}",
            self.ship_map, self.used, self.sunk, self.armed, self.vessels
        )
    }
}

//! Fixed game constants and runtime tuning knobs.

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 6;

/// Lengths of the vessels each side places, in placement order.
pub const FLEET: [usize; NUM_VESSELS] = [3, 2, 2, 1, 1, 1, 1];
pub const NUM_VESSELS: usize = 7;

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Column header labels; only the first `BOARD_SIZE` appear on the grid.
pub const COLUMN_LABELS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Bounds for the generate-and-test fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Failed `place_vessel` calls tolerated before the board is wiped and
    /// placement starts again.
    pub attempts_per_board: usize,
    /// Board restarts tolerated before placement is reported as exhausted.
    pub max_board_restarts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            attempts_per_board: 1000,
            max_board_restarts: 1000,
        }
    }
}

/// Runtime settings for a [`Match`](crate::Match).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub placement: PlacementConfig,
    /// How many rejected shots in a row a scripted player may make before the
    /// turn fails with [`GameError::TooManyRejectedShots`](crate::GameError).
    /// The console player is never cut off.
    pub shot_retry_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            placement: PlacementConfig::default(),
            shot_retry_limit: 100,
        }
    }
}

//! Common types for Sea Battle: shot results and error kinds.

use std::{fmt, io};

use serde::Serialize;

use crate::bitboard::BitBoardError;
use crate::coord::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotResult {
    /// Shot struck a vessel that still has hit points left.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot took the last hit point of a vessel.
    Sunk,
}

impl ShotResult {
    /// A hit or a sinking lets the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Why a vessel could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFault {
    /// A vessel segment falls outside the grid.
    OutOfBounds,
    /// A vessel segment overlaps another vessel or its exclusion buffer.
    Used,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Shot target lies outside the grid.
    OutOfBounds(Coordinate),
    /// Shot target was already shot at, or is blocked around a sunk vessel.
    AlreadyTargeted(Coordinate),
    /// Vessel cannot go here; `at` is the first offending segment.
    InvalidPlacement { at: Coordinate, fault: PlacementFault },
    /// The board has been armed for shooting and no longer accepts vessels.
    PlacementClosed,
    /// Random placement gave up after this many board restarts.
    PlacementExhausted { restarts: usize },
}

impl BoardError {
    /// Shot rejections the same player may simply try again after.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_)
        )
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds(at) => BoardError::OutOfBounds(at),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(at) => write!(f, "Coordinates {} are off the board", at),
            BoardError::AlreadyTargeted(at) => {
                write!(f, "Cell {} was already shot at or cannot hold a ship", at)
            }
            BoardError::InvalidPlacement { at, fault } => match fault {
                PlacementFault::OutOfBounds => {
                    write!(f, "Vessel placement leaves the board at {}", at)
                }
                PlacementFault::Used => {
                    write!(f, "Vessel placement touches another vessel at {}", at)
                }
            },
            BoardError::PlacementClosed => write!(f, "Board is armed; no more vessels allowed"),
            BoardError::PlacementExhausted { restarts } => write!(
                f,
                "Unable to place the fleet after {} board restarts",
                restarts
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Reasons a line of human input could not be turned into a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line did not contain exactly two tokens; carries how many it had.
    WrongTokenCount(usize),
    /// The tokens were not a row number followed by a column letter.
    WrongTokenType,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(_) => {
                write!(f, "Enter 2 coordinates separated by a space!")
            }
            InputError::WrongTokenType => write!(f, "Enter a row number and a column letter!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Failures while asking a player for a target.
#[derive(Debug)]
pub enum PlayerError {
    /// The player asked to leave the game.
    Quit,
    /// A scripted player has shot at every cell already.
    NoTargetsLeft,
    /// Console I/O failed.
    Io(io::Error),
}

impl From<io::Error> for PlayerError {
    fn from(err: io::Error) -> Self {
        PlayerError::Io(err)
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Quit => write!(f, "Player left the game"),
            PlayerError::NoTargetsLeft => write!(f, "No untargeted cells remain"),
            PlayerError::Io(e) => write!(f, "Console I/O failed: {}", e),
        }
    }
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors that end or abort a match.
#[derive(Debug)]
pub enum GameError {
    Board(BoardError),
    Player(PlayerError),
    /// A player kept choosing illegal targets.
    TooManyRejectedShots { attempts: usize },
    /// `step` was called on a finished match.
    AlreadyFinished,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<PlayerError> for GameError {
    fn from(err: PlayerError) -> Self {
        GameError::Player(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Player(e) => write!(f, "Player error: {}", e),
            GameError::TooManyRejectedShots { attempts } => {
                write!(f, "Gave up after {} rejected shots in a row", attempts)
            }
            GameError::AlreadyFinished => write!(f, "The match is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            GameError::Player(e) => Some(e),
            _ => None,
        }
    }
}

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod game;
mod input;
mod logging;
mod player;
mod ship;
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use input::*;
pub use logging::{init_logging, level_from, DEFAULT_LEVEL};
pub use player::*;
pub use ship::*;

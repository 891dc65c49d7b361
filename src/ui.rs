//! Text rendering for the console game.
//!
//! Everything here returns `String`s so the engine never touches stdout.

use std::fmt::Write;

use crate::board::{Board, Cell};
use crate::config::{BOARD_SIZE, COLUMN_LABELS, FLEET};
use crate::coord::Coordinate;
use crate::game::Side;

const SHIP: char = '■';

/// Glyph for a cell; intact ships on hidden boards look like open water.
pub fn glyph(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship if hidden => 'O',
        Cell::Ship => SHIP,
        Cell::Hit => 'X',
        Cell::Miss => 'T',
        Cell::Blocked => '•',
    }
}

/// Render one board as a grid with a letter header and numbered rows.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  |");
    for label in COLUMN_LABELS.iter().take(BOARD_SIZE) {
        let _ = write!(out, " {} |", label);
    }
    out.push('\n');
    out.push_str(&"-".repeat(BOARD_SIZE * 4 + 3));
    for row in 0..BOARD_SIZE {
        let _ = write!(out, "\n{} |", row + 1);
        for col in 0..BOARD_SIZE {
            let cell = board.cell(Coordinate::new(row, col)).unwrap_or(Cell::Empty);
            let _ = write!(out, " {} |", glyph(cell, board.is_hidden()));
        }
    }
    out
}

/// Lay two titled blocks of text next to each other.
pub fn side_by_side(left: &str, right: &str) -> String {
    let left_lines: Vec<&str> = left.lines().collect();
    let right_lines: Vec<&str> = right.lines().collect();
    let width = left_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let rows = left_lines.len().max(right_lines.len());

    let mut out = String::new();
    for i in 0..rows {
        let l = left_lines.get(i).copied().unwrap_or("");
        let r = right_lines.get(i).copied().unwrap_or("");
        let _ = writeln!(out, "     {:<width$}        ||        {}", l, r, width = width);
    }
    out
}

/// The player's board on the left, the computer's on the right.
pub fn render_view(player: &Board, computer: &Board) -> String {
    let left = format!("Player's board:\n{}", render_board(player));
    let right = format!("Computer's board:\n{}", render_board(computer));
    side_by_side(&left, &right)
}

/// Welcome text with the rules and the fleet.
pub fn banner() -> String {
    let rule = "*".repeat(78);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Welcome aboard, admiral!");
    let _ = writeln!(out, "Let's play a round of Sea Battle.");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Rules:");
    let _ = writeln!(out, "\t1. Both fleets are placed at random before the game starts;");
    let _ = writeln!(out, "\t2. You and the computer take turns firing;");
    let _ = writeln!(out, "\t3. Enter a target as <row> <column>, e.g. 3 B;");
    let _ = writeln!(out, "\t4. Hitting or sinking a ship earns you another shot;");
    let _ = writeln!(out, "\t5. Hits are marked X, misses T, water around a sunk ship •;");
    let _ = writeln!(out, "\t6. A miss passes the turn to your opponent;");
    let _ = writeln!(out, "\t7. The first to sink the whole enemy fleet wins.");
    let _ = writeln!(out, "\tType 'quit' at the prompt to leave.");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out);
    let _ = writeln!(out, "The board is {0}x{0}. Each side has:", BOARD_SIZE);
    for len in (1..=3).rev() {
        let count = FLEET.iter().filter(|&&l| l == len).count();
        let _ = writeln!(
            out,
            "\t{} x {} ({})",
            count,
            SHIP.to_string().repeat(len),
            len
        );
    }
    out
}

/// Final message; the first side is the human.
pub fn game_over_message(winner: Side) -> &'static str {
    match winner {
        Side::First => "Congratulations, admiral, you won!",
        Side::Second => "Sorry, the computer won this time. Better luck next battle!",
    }
}

//! Parsing of typed targets such as `3 B`.

use crate::common::InputError;
use crate::config::COLUMN_LABELS;
use crate::coord::Coordinate;

/// Parse a line holding a 1-based row number and a column letter.
///
/// Only the shape of the input is checked here. The column must be one of
/// [`COLUMN_LABELS`]; a labelled letter or a row beyond the grid still parses,
/// and the board rejects it as out of bounds.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };

    if !row.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::WrongTokenType);
    }
    let row = row
        .parse::<usize>()
        .ok()
        .and_then(|r| r.checked_sub(1))
        .ok_or(InputError::WrongTokenType)?;

    let mut letters = col.chars();
    let (Some(letter), None) = (letters.next(), letters.next()) else {
        return Err(InputError::WrongTokenType);
    };
    let col = COLUMN_LABELS
        .iter()
        .position(|&l| l == letter.to_ascii_uppercase())
        .ok_or(InputError::WrongTokenType)?;

    Ok(Coordinate::new(row, col))
}

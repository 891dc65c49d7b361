use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, CliPlayer, Coordinate, Player, PlayerError, ShotResult, TurnView,
};

fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn ask(p: &mut CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> Result<Coordinate, PlayerError> {
    let mut rng = SmallRng::seed_from_u64(0);
    let own = Board::new();
    let mut opponent = Board::new();
    opponent.set_hidden(true);
    p.select_target(
        &mut rng,
        TurnView {
            own: &own,
            opponent: &opponent,
        },
    )
}

#[test]
fn test_reads_valid_target() {
    let mut p = player("2 c\n");
    assert_eq!(ask(&mut p).unwrap(), Coordinate::new(1, 2));
    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("Player's board:"));
    assert!(out.contains("Computer's board:"));
    assert!(out.contains("Enter target coordinates: "));
}

#[test]
fn test_reprompts_on_malformed_input() {
    let mut p = player("1\nx y\n4 d\n");
    assert_eq!(ask(&mut p).unwrap(), Coordinate::new(3, 3));
    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("Enter 2 coordinates separated by a space!"));
    assert!(out.contains("Enter a row number and a column letter!"));
    assert_eq!(out.matches("Enter target coordinates: ").count(), 3);
}

#[test]
fn test_quit_and_end_of_input() {
    let mut p = player("quit\n");
    assert!(matches!(ask(&mut p), Err(PlayerError::Quit)));
    let mut p = player("");
    assert!(matches!(ask(&mut p), Err(PlayerError::Quit)));
}

#[test]
fn test_reports_results() {
    let mut p = player("");
    p.handle_shot_result(Coordinate::new(0, 0), ShotResult::Sunk);
    p.handle_opponent_shot(Coordinate::new(2, 1), ShotResult::Miss);
    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("Sunk!"));
    assert!(out.contains("Computer fires at 3 B: Missed!"));
}

use std::collections::{HashSet, VecDeque};
use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    take_turn, AiPlayer, Board, CliPlayer, Coordinate, GameError, Match, MatchConfig, MatchState,
    Orientation, Player, PlayerError, ShotResult, Side, TurnView, Vessel, BOARD_SIZE,
    NUM_VESSELS,
};

/// Fires at a fixed list of targets, then gives up.
struct Scripted {
    targets: VecDeque<Coordinate>,
    rejected: usize,
}

impl Scripted {
    fn new(targets: &[(usize, usize)]) -> Self {
        Self {
            targets: targets.iter().map(|&t| Coordinate::from(t)).collect(),
            rejected: 0,
        }
    }
}

impl Player for Scripted {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _view: TurnView<'_>,
    ) -> Result<Coordinate, PlayerError> {
        self.targets.pop_front().ok_or(PlayerError::NoTargetsLeft)
    }

    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: &seabattle::BoardError) {
        self.rejected += 1;
    }
}

/// The standard fleet laid out by hand; ship cells are listed by `FLEET_CELLS`.
fn fixed_board() -> Board {
    let mut board = Board::new();
    let layout = [
        ((0, 0), 3, Orientation::Horizontal),
        ((0, 4), 2, Orientation::Horizontal),
        ((2, 0), 2, Orientation::Horizontal),
        ((2, 3), 1, Orientation::Horizontal),
        ((2, 5), 1, Orientation::Horizontal),
        ((4, 0), 1, Orientation::Horizontal),
        ((4, 2), 1, Orientation::Horizontal),
    ];
    for (bow, len, orient) in layout {
        board
            .place_vessel(Vessel::new(Coordinate::from(bow), len, orient))
            .unwrap();
    }
    board
}

const FLEET_CELLS: [(usize, usize); 10] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 4),
    (0, 5),
    (2, 0),
    (2, 1),
    (2, 3),
    (2, 5),
    (4, 0),
];
const LAST_CELL: (usize, usize) = (4, 2);

#[test]
fn test_ai_never_repeats_and_runs_dry() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = AiPlayer::new(&mut rng);
    let own = Board::new();
    let opponent = Board::new();
    let view = TurnView {
        own: &own,
        opponent: &opponent,
    };

    let mut seen = HashSet::new();
    for _ in 0..BOARD_SIZE * BOARD_SIZE {
        let target = ai.select_target(&mut rng, view).unwrap();
        assert!(target.in_bounds());
        assert!(seen.insert(target), "{} offered twice", target);
    }
    assert!(ai.remaining().is_empty());
    assert!(matches!(
        ai.select_target(&mut rng, view),
        Err(PlayerError::NoTargetsLeft)
    ));
}

#[test]
fn test_take_turn_retries_rejected_targets() {
    let mut rng = SmallRng::seed_from_u64(0);
    let own = Board::new();
    let mut opponent = fixed_board();
    opponent.reset_used_tracking();
    opponent.receive_shot(Coordinate::new(5, 5)).unwrap();

    let mut player = Scripted::new(&[(9, 9), (5, 5), (0, 0)]);
    let outcome = take_turn(&mut player, &mut rng, &own, &mut opponent, Some(10)).unwrap();
    assert_eq!(outcome.target, Coordinate::new(0, 0));
    assert_eq!(outcome.result, ShotResult::Hit);
    assert!(outcome.repeat);
    assert_eq!(player.rejected, 2);
}

#[test]
fn test_take_turn_gives_up_after_limit() {
    let mut rng = SmallRng::seed_from_u64(0);
    let own = Board::new();
    let mut opponent = fixed_board();
    opponent.reset_used_tracking();

    let mut player = Scripted::new(&[(6, 0), (0, 6), (7, 7), (1, 1)]);
    let err = take_turn(&mut player, &mut rng, &own, &mut opponent, Some(3)).unwrap_err();
    assert!(matches!(
        err,
        GameError::TooManyRejectedShots { attempts: 3 }
    ));
}

#[test]
fn test_console_player_is_never_cut_off() {
    let mut rng = SmallRng::seed_from_u64(0);
    let typed = "9 A\n".repeat(150) + "1 A\n";
    let human: Box<dyn Player> = Box::new(CliPlayer::new(
        Cursor::new(typed.into_bytes()),
        Vec::new(),
    ));
    let computer: Box<dyn Player> = Box::new(Scripted::new(&[]));
    let config = MatchConfig::default();
    assert!(config.shot_retry_limit < 150);
    let mut game = Match::with_boards([human, computer], [fixed_board(), fixed_board()], config);

    let record = game.step(&mut rng).unwrap();
    assert_eq!(record.side, Side::First);
    assert_eq!(record.target, Coordinate::new(0, 0));
    assert_eq!(record.result, ShotResult::Hit);
    assert_eq!(game.shots_fired(Side::First), 1);
}

#[test]
fn test_scripted_player_limit_applies_in_match() {
    let mut rng = SmallRng::seed_from_u64(0);
    let first: Box<dyn Player> = Box::new(Scripted::new(&[(6, 0), (0, 6), (0, 0)]));
    let second: Box<dyn Player> = Box::new(Scripted::new(&[]));
    let config = MatchConfig {
        shot_retry_limit: 2,
        ..MatchConfig::default()
    };
    let mut game = Match::with_boards([first, second], [fixed_board(), fixed_board()], config);

    let err = game.step(&mut rng).unwrap_err();
    assert!(matches!(
        err,
        GameError::TooManyRejectedShots { attempts: 2 }
    ));
}

#[test]
fn test_hits_keep_the_turn_until_victory() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut targets = FLEET_CELLS.to_vec();
    targets.push(LAST_CELL);
    let first: Box<dyn Player> = Box::new(Scripted::new(&targets));
    let second: Box<dyn Player> = Box::new(Scripted::new(&[]));
    let mut game = Match::with_boards(
        [first, second],
        [fixed_board(), fixed_board()],
        MatchConfig::default(),
    );
    assert_eq!(game.state(), MatchState::Playing);

    for _ in 0..FLEET_CELLS.len() {
        let record = game.step(&mut rng).unwrap();
        assert_eq!(record.side, Side::First);
        assert!(record.repeat);
        assert_eq!(game.state(), MatchState::Playing);
        assert_eq!(game.turn(), Side::First);
    }
    assert_eq!(game.board(Side::Second).sunk_count(), NUM_VESSELS - 1);

    let last = game.step(&mut rng).unwrap();
    assert_eq!(last.result, ShotResult::Sunk);
    assert_eq!(game.state(), MatchState::Finished(Side::First));
    assert_eq!(game.winner(), Some(Side::First));
    assert_eq!(game.shots_fired(Side::First), 11);
    assert_eq!(game.shots_fired(Side::Second), 0);
    assert!(matches!(
        game.step(&mut rng),
        Err(GameError::AlreadyFinished)
    ));
}

#[test]
fn test_miss_passes_the_turn() {
    let mut rng = SmallRng::seed_from_u64(0);
    let first: Box<dyn Player> = Box::new(Scripted::new(&[(5, 5)]));
    let second: Box<dyn Player> = Box::new(Scripted::new(&[(0, 0), (5, 4)]));
    let mut game = Match::with_boards(
        [first, second],
        [fixed_board(), fixed_board()],
        MatchConfig::default(),
    );

    let record = game.step(&mut rng).unwrap();
    assert_eq!(record.result, ShotResult::Miss);
    assert!(!record.repeat);
    assert_eq!(game.turn(), Side::Second);

    let record = game.step(&mut rng).unwrap();
    assert_eq!(record.side, Side::Second);
    assert_eq!(record.result, ShotResult::Hit);
    assert_eq!(game.turn(), Side::Second);

    let record = game.step(&mut rng).unwrap();
    assert_eq!(record.result, ShotResult::Miss);
    assert_eq!(game.turn(), Side::First);
}

#[test]
fn test_player_error_aborts_step() {
    let mut rng = SmallRng::seed_from_u64(0);
    let first: Box<dyn Player> = Box::new(Scripted::new(&[]));
    let second: Box<dyn Player> = Box::new(Scripted::new(&[]));
    let mut game = Match::with_boards(
        [first, second],
        [fixed_board(), fixed_board()],
        MatchConfig::default(),
    );
    assert!(matches!(
        game.step(&mut rng),
        Err(GameError::Player(PlayerError::NoTargetsLeft))
    ));
    assert_eq!(game.state(), MatchState::Playing);
}

#[test]
fn test_ai_vs_ai_game() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let p1: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
        let p2: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
        let mut game = Match::new([p1, p2], MatchConfig::default());
        assert_eq!(game.state(), MatchState::Setup);
        game.setup(&mut rng).unwrap();
        assert!(game.board(Side::Second).is_hidden());
        assert!(!game.board(Side::First).is_hidden());

        let mut moves = 0;
        while game.state() == MatchState::Playing {
            assert!(game.board(Side::First).sunk_count() < NUM_VESSELS);
            assert!(game.board(Side::Second).sunk_count() < NUM_VESSELS);
            let record = game.step(&mut rng).unwrap();
            assert_eq!(record.repeat, record.result != ShotResult::Miss);
            if game.state() == MatchState::Playing {
                let expected = if record.repeat {
                    record.side
                } else {
                    record.side.opponent()
                };
                assert_eq!(game.turn(), expected);
            }
            moves += 1;
            assert!(moves <= 2 * BOARD_SIZE * BOARD_SIZE, "game took too many moves");
        }

        let winner = game.winner().unwrap();
        assert_eq!(game.board(winner.opponent()).sunk_count(), NUM_VESSELS);
        assert!(game.board(winner).sunk_count() < NUM_VESSELS);
        let summary = game.summary().unwrap();
        assert_eq!(summary.winner, winner);
        assert_eq!(summary.sunk[winner.opponent().index()], NUM_VESSELS);
    }
}

#[test]
fn test_run_is_reproducible() {
    let play = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let p1: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
        let p2: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
        let mut game = Match::new([p1, p2], MatchConfig::default());
        let winner = game.run(&mut rng).unwrap();
        (winner, game.summary().unwrap())
    };
    assert_eq!(play(99), play(99));
}

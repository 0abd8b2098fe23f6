//! Integration tests for the 2048 rules through the facade crate.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::{merge_line, Board, GameState, SequenceRng};
use tui_2048::types::{Direction, GameAction, GameStatus};

/// Start a fresh game whose opening tiles come from `rng`.
fn started(rng: SequenceRng) -> GameState<SequenceRng> {
    let mut game = GameState::with_rng(None, rng);
    game.start();
    game
}

/// Continue play on a supplied board.
fn resumed(rows: [[u32; 4]; 4]) -> GameState<SequenceRng> {
    let mut game = GameState::with_rng(Some(Board::from_rows(rows)), SequenceRng::new());
    game.resume();
    game
}

#[test]
fn test_move_left_merges_pair() {
    // Both opening 2s land on the first empty cell in turn.
    let mut game = started(SequenceRng::new());
    assert_eq!(game.state(), [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);

    assert!(game.move_left());
    assert_eq!(game.score(), 4);
    // Merged 4, then the spawned 2 on the first empty cell.
    assert_eq!(game.state()[0], [4, 2, 0, 0]);

    let tiles = game.state().iter().flatten().filter(|&&v| v != 0).count();
    assert_eq!(tiles, 2);
}

#[test]
fn test_move_right_merges_across_gap() {
    let mut game = started(SequenceRng::new().with_picks([0, 1]));
    assert_eq!(game.state()[0], [2, 0, 2, 0]);

    assert!(game.move_right());
    assert_eq!(game.state()[0][3], 4);
    assert_eq!(game.state()[0], [2, 0, 0, 4]);
    assert_eq!(game.score(), 4);
}

#[test]
fn test_stuck_board_loses() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut game = GameState::with_rng(Some(Board::from_rows(rows)), SequenceRng::new());
    assert!(!game.has_valid_moves());

    game.resume();
    assert_eq!(game.status(), GameStatus::Lose);
    for dir in Direction::ALL {
        assert!(!game.apply_move(dir));
    }
    assert_eq!(game.state(), rows);
}

#[test]
fn test_move_that_creates_2048_wins() {
    let mut game = resumed([[1024, 1024, 0, 0], [2, 4, 0, 0], [0; 4], [0; 4]]);

    assert!(!game.has_won());
    assert!(game.move_left());
    assert!(game.has_won());
    assert_eq!(game.status(), GameStatus::Win);
    assert_eq!(game.score(), 2048);
    assert!(!game.move_right());
}

#[test]
fn test_board_holding_2048_is_already_won() {
    let mut game = GameState::with_rng(
        Some(Board::from_rows([[2048, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]])),
        SequenceRng::new(),
    );
    assert!(game.has_won());
    assert!(game.has_valid_moves());

    game.resume();
    assert_eq!(game.status(), GameStatus::Win);
}

#[test]
fn test_merge_once_per_move() {
    let merged = merge_line([2, 2, 2, 2]);
    assert_eq!(merged.line, [4, 4, 0, 0]);
    assert_eq!(merged.score, 8);

    let merged = merge_line([4, 4, 8, 0]);
    assert_eq!(merged.line, [8, 8, 0, 0]);
    assert_eq!(merged.score, 8);
}

#[test]
fn test_actions_drive_lifecycle() {
    let mut game = GameState::with_rng(None, StdRng::seed_from_u64(3));
    assert_eq!(game.status(), GameStatus::Idle);

    assert!(game.apply_action(GameAction::Start));
    assert_eq!(game.status(), GameStatus::Playing);

    let tiles = game.state().iter().flatten().filter(|&&v| v != 0).count();
    assert_eq!(tiles, 2);

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.score(), 0);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_score_never_decreases_during_play() {
    let mut game = GameState::new(2024);
    game.start();

    let mut last = 0;
    for i in 0..500 {
        if !game.status().is_playing() {
            break;
        }
        game.apply_move(Direction::ALL[i % 4]);
        assert!(game.score() >= last);
        last = game.score();

        for &v in game.state().iter().flatten() {
            assert!(v == 0 || (v >= 2 && v.is_power_of_two()));
        }
    }
}

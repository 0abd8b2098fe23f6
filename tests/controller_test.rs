//! Controller integration: keyboard, swipes and the start/restart button.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tui_2048::core::{Board, GameState, SequenceRng};
use tui_2048::engine::{Controller, Outcome};
use tui_2048::input::SwipeTracker;
use tui_2048::term::{GameView, Rect, Viewport};
use tui_2048::types::GameStatus;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn drag(c: &mut Controller<SequenceRng>, from: (u16, u16), to: (u16, u16)) -> Outcome {
    let none = Rect::default();
    c.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1), none);
    c.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1), none);
    c.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1), none)
}

/// Idle controller started through its button, opening tiles from `rng`.
fn started(rng: SequenceRng) -> Controller<SequenceRng> {
    let mut c = Controller::new(GameState::with_rng(None, rng), SwipeTracker::new(3));
    assert_eq!(c.press_button(), Outcome::Redraw);
    c
}

fn resumed(rows: [[u32; 4]; 4]) -> Controller<SequenceRng> {
    let mut game = GameState::with_rng(Some(Board::from_rows(rows)), SequenceRng::new());
    game.resume();
    Controller::new(game, SwipeTracker::new(3))
}

#[test]
fn arrow_key_moves_tiles() {
    // Opening board: [[2, 2, 0, 0], ..].
    let mut c = started(SequenceRng::new());

    let out = c.handle_event(&Event::Key(KeyEvent::from(KeyCode::Left)), Rect::default());
    assert_eq!(out, Outcome::Redraw);
    assert_eq!(c.game().state()[0][0], 4);
    assert_eq!(c.snapshot().score, 4);
}

#[test]
fn blocked_key_move_is_ignored() {
    let mut c = started(SequenceRng::new().with_units([0.0, 0.95]));
    assert_eq!(c.game().state()[0], [2, 4, 0, 0]);
    assert_eq!(c.handle_key(KeyEvent::from(KeyCode::Left)), Outcome::Ignored);
    assert_eq!(c.game().moves(), 0);
}

#[test]
fn horizontal_drag_swipes_right() {
    let mut c = started(SequenceRng::new());

    assert_eq!(drag(&mut c, (10, 10), (20, 11)), Outcome::Redraw);
    assert_eq!(c.game().state()[0][3], 4);
}

#[test]
fn vertical_drag_swipes_up() {
    // Opening tiles at (3,0) and (0,0).
    let mut c = started(SequenceRng::new().with_picks([12, 0]));

    // Rows count double, so 4 rows beat 4 columns.
    assert_eq!(drag(&mut c, (10, 10), (14, 6)), Outcome::Redraw);
    assert_eq!(c.game().state()[0][0], 4);
    assert_eq!(c.snapshot().score, 4);
}

#[test]
fn short_drag_is_not_a_swipe() {
    let mut c = started(SequenceRng::new());

    assert_eq!(drag(&mut c, (10, 10), (13, 10)), Outcome::Ignored);
    assert_eq!(c.game().state()[0], [2, 2, 0, 0]);
}

#[test]
fn swipes_ignored_after_win() {
    let mut c = resumed([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);

    assert_eq!(c.handle_key(KeyEvent::from(KeyCode::Left)), Outcome::Redraw);
    assert_eq!(c.game().status(), GameStatus::Win);

    let before = c.game().state();
    assert_eq!(drag(&mut c, (10, 10), (30, 10)), Outcome::Ignored);
    assert_eq!(c.game().state(), before);
}

#[test]
fn clicking_rendered_button_restarts_after_loss() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut game = GameState::with_rng(Some(Board::from_rows(rows)), SequenceRng::new());
    game.resume();
    game.check_game_status();
    assert_eq!(game.status(), GameStatus::Lose);
    let mut c = Controller::new(game, SwipeTracker::default());

    let view = GameView::default();
    let vp = Viewport::new(64, 24);
    let button = view.button_rect(vp);
    assert!(!button.is_empty());

    let (x, y) = (button.x + 1, button.y);
    c.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), x, y), button);
    let out = c.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), x, y), button);

    assert_eq!(out, Outcome::Redraw);
    assert_eq!(c.game().status(), GameStatus::Playing);
    assert_eq!(c.game().score(), 0);
    let tiles = c.game().state().iter().flatten().filter(|&&v| v != 0).count();
    assert_eq!(tiles, 2);
}

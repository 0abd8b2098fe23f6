//! Controller: routes terminal input events into one owned [`GameState`].
//!
//! Keyboard moves and mouse swipes are ignored unless a game is running.
//! The start/restart button (mouse tap or key) works in every status.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState, TileRng};
use crate::input::{handle_key_event, should_quit, Gesture, SwipeTracker};
use crate::term::Rect;
use crate::types::{Direction, GameAction, GameStatus};

/// What the caller should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; re-read the snapshot and render.
    Redraw,
    /// Nothing changed.
    Ignored,
    Quit,
}

pub struct Controller<R: TileRng = StdRng> {
    game: GameState<R>,
    swipe: SwipeTracker,
}

impl<R: TileRng> Controller<R> {
    pub fn new(game: GameState<R>, swipe: SwipeTracker) -> Self {
        Self { game, swipe }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Dispatch any terminal event. `button` is the current on-screen
    /// start/restart button region.
    pub fn handle_event(&mut self, event: &Event, button: Rect) -> Outcome {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, button),
            Event::Resize(..) => Outcome::Redraw,
            Event::FocusLost => {
                self.swipe.cancel();
                Outcome::Ignored
            }
            _ => Outcome::Ignored,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if key.kind == KeyEventKind::Release {
            return Outcome::Ignored;
        }
        if should_quit(key) {
            return Outcome::Quit;
        }

        match handle_key_event(key) {
            Some(GameAction::Start | GameAction::Restart) => self.press_button(),
            Some(action) => match action.direction() {
                Some(dir) => self.try_move(dir),
                None => Outcome::Ignored,
            },
            None => Outcome::Ignored,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, button: Rect) -> Outcome {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.press(mouse.column, mouse.row);
                Outcome::Ignored
            }
            MouseEventKind::Down(_) => {
                self.swipe.cancel();
                Outcome::Ignored
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match self.swipe.release(mouse.column, mouse.row) {
                    Gesture::Swipe(dir) => self.try_move(dir),
                    Gesture::Tap { column, row } if button.contains(column, row) => {
                        self.press_button()
                    }
                    Gesture::Tap { .. } | Gesture::None => Outcome::Ignored,
                }
            }
            _ => Outcome::Ignored,
        }
    }

    /// Start from idle/win/lose, restart while playing.
    pub fn press_button(&mut self) -> Outcome {
        match self.game.status() {
            GameStatus::Idle | GameStatus::Win | GameStatus::Lose => {
                info!(from = self.game.status().as_str(), "start pressed");
                self.game.start();
            }
            GameStatus::Playing => {
                info!(score = self.game.score(), "restart pressed");
                self.game.restart();
            }
        }
        Outcome::Redraw
    }

    fn try_move(&mut self, dir: Direction) -> Outcome {
        if !self.game.status().is_playing() {
            return Outcome::Ignored;
        }
        if self.game.apply_move(dir) {
            Outcome::Redraw
        } else {
            debug!(direction = dir.as_str(), "move left board unchanged");
            Outcome::Ignored
        }
    }
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies beyond
//! `serde` derives, making them usable in any context (core logic, terminal
//! rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid. Cells are addressed as `(row, col)` with
//! `(0, 0)` in the top-left corner.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Rows and columns of the board |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance that a spawned tile is a 2 (else 4) |
//! | `INITIAL_TILES` | 2 | Tiles placed by `start()` |
//! | `DEFAULT_MIN_SWIPE` | 3 | Minimum drag distance (terminal cells) for a swipe |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, BOARD_SIZE};
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert!(Direction::Down.is_reversed());
//!
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Up));
//!
//! assert_eq!(GameStatus::Idle.as_str(), "idle");
//! assert_eq!(BOARD_SIZE, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Board width and height in cells.
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Reaching this tile value wins the game.
pub const WIN_TILE: u32 = 2048;

/// Probability that a freshly spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Number of tiles placed on an empty board when a game starts.
pub const INITIAL_TILES: usize = 2;

/// Default minimum mouse-drag distance, in terminal cells, for a swipe.
pub const DEFAULT_MIN_SWIPE: u16 = 3;

/// The four move directions.
///
/// A move compacts every row (horizontal) or column (vertical) toward the
/// edge named by the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// True for moves that operate on rows.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when lines must be read back-to-front so that index 0 is the
    /// edge tiles move toward.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game phase.
///
/// `Idle` is initial. `Playing` is only reached through `start()`/`restart()`.
/// `Win` and `Lose` are terminal until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Win,
    Lose,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Win => "win",
            GameStatus::Lose => "lose",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// Win or lose.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Lose)
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by keyboard mapping, mouse gestures, and the
/// start/restart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge all rows toward the left edge
    MoveLeft,
    /// Slide and merge all rows toward the right edge
    MoveRight,
    /// Slide and merge all columns toward the top edge
    MoveUp,
    /// Slide and merge all columns toward the bottom edge
    MoveDown,
    /// Begin a new game from any status
    Start,
    /// Reset the current game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }

    /// The move direction, if this is a move action.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Start | GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_2048_defaults() {
        assert_eq!(BOARD_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(WIN_TILE, 2048);
        assert_eq!(INITIAL_TILES, 2);
        assert!((SPAWN_TWO_PROBABILITY - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn reversed_directions_are_right_and_down() {
        let reversed: Vec<_> = Direction::ALL.iter().filter(|d| d.is_reversed()).collect();
        assert_eq!(reversed, vec![&Direction::Right, &Direction::Down]);
    }

    #[test]
    fn action_direction_roundtrips_through_from() {
        for dir in Direction::ALL {
            assert_eq!(GameAction::from(dir).direction(), Some(dir));
        }
        assert_eq!(GameAction::Start.direction(), None);
        assert_eq!(GameAction::Restart.direction(), None);
    }

    #[test]
    fn status_terminal_flags() {
        assert!(!GameStatus::Idle.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Win.is_terminal());
        assert!(GameStatus::Lose.is_terminal());
        assert!(GameStatus::Playing.is_playing());
        assert_eq!(GameStatus::default(), GameStatus::Idle);
    }
}

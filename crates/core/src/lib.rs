//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and tile
//! spawning logic. It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted [`SequenceRng`]) produces identical games
//! - **Testable**: Unit tests for every rule, including merge edge cases
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Boards are `Copy` and moves never allocate
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, line extraction per direction, and the shared `merge_line` primitive
//! - [`game_state`]: Score, status lifecycle, directional moves and tile spawning
//! - [`rng`]: The [`TileRng`] random-source seam
//! - [`snapshot`]: Copyable view of the state for rendering
//!
//! # Game Rules
//!
//! - **Moves**: Every row (left/right) or column (up/down) slides toward the edge;
//!   adjacent equal tiles merge once per move and the merged value is added to the score
//! - **Spawning**: After a move that changed the board, one tile appears on a random
//!   empty cell: a 2 with 90% probability, otherwise a 4
//! - **Win**: Any tile reaches 2048 (checked before loss)
//! - **Loss**: No empty cell and no equal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState, SequenceRng};
//! use tui_2048_types::GameStatus;
//!
//! let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! let mut game = GameState::with_rng(Some(board), SequenceRng::new());
//!
//! // Moves are rejected until the game is running.
//! assert!(!game.move_left());
//!
//! game.resume();
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert!(game.move_left());
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.state()[0][0], 4);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{is_valid_tile, merge_line, Board, BoardError, LineMerge};
pub use game_state::GameState;
pub use rng::{spawn_value, SequenceRng, TileRng};
pub use snapshot::GameSnapshot;

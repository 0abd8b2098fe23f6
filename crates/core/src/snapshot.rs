use serde::Serialize;

use crate::types::{GameStatus, BOARD_SIZE};

/// Read-only copy of everything the view needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    pub board: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub status: GameStatus,
    pub moves: u32,
    pub max_tile: u32,
}

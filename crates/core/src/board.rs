//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell is either empty (`0`) or holds a
//! tile whose value is a power of two (2, 4, 8, ...).
//! Uses a flat array for zero-allocation copies and comparisons.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3 (left to right)

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Direction, BOARD_SIZE, CELL_COUNT, WIN_TILE};

/// Rejected board input (wrong shape or a cell that is not a valid tile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    WrongRowCount(usize),
    WrongRowLength { row: usize, len: usize },
    InvalidTile { row: usize, col: usize, value: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongRowCount(n) => {
                write!(f, "expected {} rows, got {}", BOARD_SIZE, n)
            }
            BoardError::WrongRowLength { row, len } => {
                write!(f, "row {} has {} cells, expected {}", row, len, BOARD_SIZE)
            }
            BoardError::InvalidTile { row, col, value } => write!(
                f,
                "cell ({}, {}) holds {}, which is neither 0 nor a power of two >= 2",
                row, col, value
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// A cell value is a legal tile if it is empty or a power of two >= 2.
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Result of merging one line toward its leading edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMerge {
    pub line: [u32; BOARD_SIZE],
    /// Sum of the tiles created by merges in this line.
    pub score: u32,
}

/// Slide and merge a line toward index 0.
///
/// Zeros are dropped, adjacent equal tiles are combined left-to-right (each
/// tile takes part in at most one merge), and the result is padded with zeros.
///
/// ```
/// use tui_2048_core::board::merge_line;
///
/// let m = merge_line([2, 2, 2, 2]);
/// assert_eq!(m.line, [4, 4, 0, 0]);
/// assert_eq!(m.score, 8);
/// ```
pub fn merge_line(line: [u32; BOARD_SIZE]) -> LineMerge {
    let tiles: ArrayVec<u32, BOARD_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut merged: ArrayVec<u32, BOARD_SIZE> = ArrayVec::new();
    let mut score = 0;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let doubled = tiles[i] * 2;
            merged.push(doubled);
            score += doubled;
            // Skip the partner so the new tile is not merged again this pass.
            i += 2;
        } else {
            merged.push(tiles[i]);
            i += 1;
        }
    }

    let mut out = [0; BOARD_SIZE];
    out[..merged.len()].copy_from_slice(&merged);
    LineMerge { line: out, score }
}

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from rows without validation.
    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            board.cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE].copy_from_slice(values);
        }
        board
    }

    /// Build a board from untrusted nested rows, checking shape and tiles.
    pub fn try_from_rows(rows: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != BOARD_SIZE {
                return Err(BoardError::WrongRowLength {
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
                board.cells[row * BOARD_SIZE + col] = value;
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Copy of the grid as nested rows.
    pub fn rows(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in out.iter_mut().enumerate() {
            values.copy_from_slice(&self.cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE]);
        }
        out
    }

    /// Read row or column `index` in move order for `dir`.
    ///
    /// Index 0 of the returned line is the edge tiles slide toward, so a
    /// single left-merge serves all four directions.
    pub fn line(&self, dir: Direction, index: usize) -> [u32; BOARD_SIZE] {
        let mut line = [0; BOARD_SIZE];
        for (i, slot) in line.iter_mut().enumerate() {
            *slot = self.cells[Self::line_cell(dir, index, i)];
        }
        if dir.is_reversed() {
            line.reverse();
        }
        line
    }

    /// Write back a line produced from [`Board::line`] with the same `dir` and `index`.
    pub fn set_line(&mut self, dir: Direction, index: usize, mut line: [u32; BOARD_SIZE]) {
        if dir.is_reversed() {
            line.reverse();
        }
        for (i, value) in line.iter().enumerate() {
            self.cells[Self::line_cell(dir, index, i)] = *value;
        }
    }

    #[inline(always)]
    fn line_cell(dir: Direction, index: usize, i: usize) -> usize {
        if dir.is_horizontal() {
            index * BOARD_SIZE + i
        } else {
            i * BOARD_SIZE + index
        }
    }

    /// Empty cell coordinates in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(idx, _)| (idx / BOARD_SIZE, idx % BOARD_SIZE))
            .collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.contains(&0)
    }

    /// Check whether any tile equals its right or lower neighbour.
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let current = self.cells[row * BOARD_SIZE + col];
                if col + 1 < BOARD_SIZE && self.cells[row * BOARD_SIZE + col + 1] == current {
                    return true;
                }
                if row + 1 < BOARD_SIZE && self.cells[(row + 1) * BOARD_SIZE + col] == current {
                    return true;
                }
            }
        }
        false
    }

    pub fn contains(&self, value: u32) -> bool {
        self.cells.contains(&value)
    }

    pub fn has_winning_tile(&self) -> bool {
        self.contains(WIN_TILE)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn tile_sum(&self) -> u32 {
        self.cells.iter().sum()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Board::try_from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<u32>> {
    fn from(board: Board) -> Self {
        board.rows().iter().map(|row| row.to_vec()).collect()
    }
}

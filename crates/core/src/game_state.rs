//! Game state module - manages the complete game state
//!
//! This module ties together the board, the tile random source and scoring.
//! It applies the four directional moves, spawns tiles, and tracks the
//! idle/playing/win/lose lifecycle.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::{merge_line, Board};
use crate::rng::{spawn_value, TileRng};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GameStatus, BOARD_SIZE, INITIAL_TILES};

/// Complete game state
///
/// Generic over the random source so tests can script tile placement.
#[derive(Debug, Clone)]
pub struct GameState<R: TileRng = StdRng> {
    board: Board,
    score: u32,
    status: GameStatus,
    /// Accepted moves since the last start.
    moves: u32,
    rng: R,
}

impl GameState<StdRng> {
    /// Create an idle game with an empty board and a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_rng(None, StdRng::seed_from_u64(seed))
    }
}

impl<R: TileRng> GameState<R> {
    /// Create an idle game, optionally on a supplied board.
    pub fn with_rng(initial: Option<Board>, rng: R) -> Self {
        Self {
            board: initial.unwrap_or_default(),
            score: 0,
            status: GameStatus::Idle,
            moves: 0,
            rng,
        }
    }

    /// Start a fresh game: empty board, zero score, two random tiles.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::Playing;

        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
        info!(board = ?self.board.rows(), "game started");
    }

    /// Identical to [`GameState::start`].
    pub fn restart(&mut self) {
        self.start();
    }

    /// Begin playing on the current board without clearing it.
    ///
    /// An empty board falls back to [`GameState::start`]. A board that is
    /// already won or stuck moves straight to the terminal status.
    pub fn resume(&mut self) {
        if self.board.tile_sum() == 0 {
            self.start();
            return;
        }
        self.status = GameStatus::Playing;
        self.check_game_status();
        info!(status = self.status.as_str(), "game resumed from supplied board");
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Copy of the board as nested rows. Mutating it never affects the game.
    pub fn state(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        self.board.rows()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_left(&mut self) -> bool {
        self.apply_move(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.apply_move(Direction::Right)
    }

    pub fn move_up(&mut self) -> bool {
        self.apply_move(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.apply_move(Direction::Down)
    }

    /// Slide and merge every line toward `dir`.
    ///
    /// Returns `true` iff the board changed. Rejected (returns `false`, no
    /// effect) unless the game is playing. On change, one tile is spawned
    /// and the status is re-evaluated.
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        if !self.status.is_playing() {
            return false;
        }

        let before = self.board;
        let mut gained = 0;
        for index in 0..BOARD_SIZE {
            let merged = merge_line(self.board.line(dir, index));
            self.board.set_line(dir, index, merged.line);
            gained += merged.score;
        }

        if self.board == before {
            return false;
        }

        self.score += gained;
        self.moves += 1;
        let spawned = self.spawn_random_tile();
        debug!(
            direction = dir.as_str(),
            gained,
            score = self.score,
            ?spawned,
            "move applied"
        );
        self.check_game_status();
        true
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns the cell used, or `None` when the board is full.
    pub fn spawn_random_tile(&mut self) -> Option<(usize, usize)> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.pick_index(empty.len())];
        let value = spawn_value(&mut self.rng);
        self.board.set(row, col, value);
        Some((row, col))
    }

    /// True if some move would change the board.
    pub fn has_valid_moves(&self) -> bool {
        self.board.has_empty() || self.board.has_adjacent_pair()
    }

    pub fn has_won(&self) -> bool {
        self.board.has_winning_tile()
    }

    /// Win takes priority over lose. Otherwise the status is left unchanged.
    pub fn check_game_status(&mut self) {
        let next = if self.has_won() {
            GameStatus::Win
        } else if !self.has_valid_moves() {
            GameStatus::Lose
        } else {
            return;
        };

        if self.status != next {
            info!(
                status = next.as_str(),
                score = self.score,
                max_tile = self.board.max_tile(),
                "game finished"
            );
        }
        self.status = next;
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveUp => self.move_up(),
            GameAction::MoveDown => self.move_down(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.rows();
        out.score = self.score;
        out.status = self.status;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    fn force_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

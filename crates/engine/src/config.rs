//! Runtime configuration read from environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::controller::Controller;
use crate::core::{Board, GameState};
use crate::input::SwipeTracker;
use crate::types::DEFAULT_MIN_SWIPE;

pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_BOARD: &str = "TUI_2048_BOARD";
pub const ENV_MIN_SWIPE: &str = "TUI_2048_MIN_SWIPE";
pub const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";
pub const ENV_LOG: &str = "TUI_2048_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Board to resume from, as JSON rows (e.g. `[[2,0,0,0],...]`).
    pub initial_board: Option<Board>,
    pub min_swipe: u16,
    /// Tracing output file. Logging stays off when unset so nothing is
    /// written over the alternate screen.
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_board: None,
            min_swipe: DEFAULT_MIN_SWIPE,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset;
    /// unparsable numbers fall back to defaults, an invalid board is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        config.seed = get(ENV_SEED).and_then(|v| v.parse::<u64>().ok());

        if let Some(raw) = get(ENV_BOARD) {
            let board: Board = serde_json::from_str(&raw)
                .with_context(|| format!("invalid {} value", ENV_BOARD))?;
            config.initial_board = Some(board);
        }

        if let Some(min) = get(ENV_MIN_SWIPE).and_then(|v| v.parse::<u16>().ok()) {
            config.min_swipe = min;
        }

        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Idle game, or a running one when a starting board was supplied.
    pub fn build_game(&self) -> GameState<StdRng> {
        let mut game = GameState::with_rng(self.initial_board, self.rng());
        if self.initial_board.is_some() {
            game.resume();
        }
        game
    }

    pub fn build_controller(&self) -> Controller<StdRng> {
        Controller::new(self.build_game(), SwipeTracker::new(self.min_swipe))
    }
}

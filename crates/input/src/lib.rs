//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game rules. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and turns mouse
//! drags into swipe gestures, the terminal counterpart of touch swipes.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{Gesture, SwipeTracker};

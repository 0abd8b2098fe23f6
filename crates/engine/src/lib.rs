//! Engine: wires input, rules and rendering together.
//!
//! [`Controller`] owns one game and turns terminal events into game calls;
//! [`AppConfig`] reads startup options from the environment.

pub mod config;
pub mod controller;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use config::AppConfig;
pub use controller::{Controller, Outcome};
pub use logging::init_logging;

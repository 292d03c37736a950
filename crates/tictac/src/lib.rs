//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **App**: setup screens, turn orchestration and reset
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Config**: TOML file plus command-line overrides
//! - **Analyze**: one-shot evaluation of a board for scripting

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod app;
mod cli;
mod config;
mod input;
mod mode;
mod roster;
mod ui;

pub use analyze::{Analysis, analyze};
pub use app::{App, Control, Cue, Screen, SearchRequest};
pub use cli::{Cli, Command, Side};
pub use config::{ConfigError, GameConfig};
pub use input::{digit_position, move_cursor};
pub use mode::GameMode;
pub use roster::{Roster, SetupError};
pub use ui::draw;

//! Pure tic-tac-toe game logic.
//!
//! The engine answers three questions for whatever front end drives it:
//!
//! - [`apply_move`] - is this move legal, and what board results from it?
//! - [`evaluate`] - has the game ended, and on which line?
//! - [`select_move`] - what is the optimal move for a side?
//!
//! [`Game`] bundles a board with its move history for callers that want a
//! session object instead of bare boards.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Board, Outcome, Player, apply_move, evaluate, select_move};
//!
//! let board = apply_move(&Board::new(), 4, Player::X).unwrap();
//! assert_eq!(evaluate(&board).outcome, Outcome::InProgress);
//!
//! let reply = select_move(&board, Player::O);
//! assert_eq!(reply.score, 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod minimax;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use minimax::{Score, SearchResult, select_move};
pub use position::Position;
pub use rules::{Evaluation, Outcome, WinningLine, apply_move, evaluate};
pub use types::{Board, BoardError, Player, Square};

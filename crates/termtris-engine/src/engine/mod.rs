//! Game engine logic and state management.
//!
//! This module orchestrates the core data structures into playable games:
//!
//! - [`GameField`] - Board plus the falling piece: spawn, movement, rotation and lock-in
//! - [`GameStats`] - Score, cleared lines, level and the fall interval derived from them
//! - [`GameSession`] - A running falling-block game driven by actions and a wall clock
//! - [`PieceGenerator`] - Uniform random piece selection
//! - [`SnakeSession`] - The companion snake game
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] (optionally with a [`PieceSeed`])
//! 2. Feed it player actions with [`GameSession::apply_action`]
//! 3. Call [`GameSession::update`] every frame so the piece falls on schedule
//! 4. When a piece can no longer fall it is locked, full lines are cleared and
//!    a new piece spawns
//! 5. The session ends when a new piece has no room at the spawn position
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use termtris_engine::{GameAction, GameSession, PieceSeed};
//!
//! let mut session = GameSession::with_seed(PieceSeed::new(42), Instant::now());
//! session.apply_action(GameAction::MoveLeft);
//! session.apply_action(GameAction::RotateClockwise);
//! session.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(session.stats().completed_pieces(), 1);
//! assert!(session.session_state().is_playing());
//! ```

pub use self::{
    game_field::*, game_session::*, game_stats::*, piece_generator::*, snake_session::*,
};

mod game_field;
mod game_session;
mod game_stats;
mod piece_generator;
mod snake_session;

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::{
    CompletePieceDropError, PieceCollisionError,
    core::{board::Board, piece::Piece},
};

use super::{GameStats, game_field::GameField, piece_generator::PieceSeed};

/// A player command understood by [`GameSession::apply_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// Moves down one row; locks the piece if it cannot move.
    SoftDrop,
    RotateClockwise,
    /// Drops the piece as far as it goes and locks it.
    HardDrop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// A running falling-block game.
///
/// The session owns the field and the statistics, and is driven from the
/// outside by two calls: [`Self::apply_action`] for player input and
/// [`Self::update`] once per frame with the current time. The piece falls one
/// row whenever [`GameStats::fall_interval`] has elapsed since the last fall.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
    session_state: SessionState,
    last_fall: Instant,
}

impl GameSession {
    /// Starts a session with a randomly seeded piece sequence.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self::with_field(GameField::new(), now)
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed, now: Instant) -> Self {
        Self::with_field(GameField::with_seed(seed), now)
    }

    /// Starts a session on an already prepared field.
    #[must_use]
    pub fn with_field(field: GameField, now: Instant) -> Self {
        info!("starting game (seed {})", field.seed());
        Self {
            field,
            stats: GameStats::new(),
            session_state: SessionState::Playing,
            last_fall: now,
        }
    }

    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.field.falling_piece()
    }

    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        self.stats.fall_interval()
    }

    /// Returns a copy of the board with the falling piece drawn in.
    ///
    /// Once the game is over the piece that failed to spawn is not drawn.
    #[must_use]
    pub fn render_board(&self) -> Board {
        let mut board = self.field.board().clone();
        if self.session_state.is_playing() {
            board.fill_piece(self.field.falling_piece());
        }
        board
    }

    /// Applies one player command. Does nothing once the game is over.
    pub fn apply_action(&mut self, action: GameAction) {
        if self.session_state.is_game_over() {
            return;
        }
        match action {
            GameAction::MoveLeft => _ = self.try_move_left(),
            GameAction::MoveRight => _ = self.try_move_right(),
            GameAction::RotateClockwise => _ = self.try_rotate_right(),
            GameAction::SoftDrop => self.auto_drop_and_complete(),
            GameAction::HardDrop => self.hard_drop_and_complete(),
        }
    }

    /// Advances the fall timer to `now`.
    ///
    /// When a full fall interval has elapsed, the piece moves down one row or,
    /// if it cannot, is locked in. The timer restarts from `now` either way.
    pub fn update(&mut self, now: Instant) {
        if self.session_state.is_game_over() {
            return;
        }
        if now.saturating_duration_since(self.last_fall) < self.fall_interval() {
            return;
        }
        self.auto_drop_and_complete();
        self.last_fall = now;
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.field.try_move_left()
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.field.try_move_right()
    }

    pub fn try_soft_drop(&mut self) -> Result<(), PieceCollisionError> {
        self.field.try_soft_drop()
    }

    pub fn try_rotate_right(&mut self) -> Result<(), PieceCollisionError> {
        self.field.try_rotate_right()
    }

    pub fn hard_drop_and_complete(&mut self) {
        let locked = self.field.simulate_drop_position();
        let outcome = self.field.hard_drop();
        self.record_lock_in(locked, outcome);
    }

    pub fn auto_drop_and_complete(&mut self) {
        if self.try_soft_drop().is_ok() {
            return;
        }
        let locked = self.field.falling_piece();
        let outcome = self.field.complete_piece_drop();
        self.record_lock_in(locked, outcome);
    }

    fn record_lock_in(
        &mut self,
        locked: Piece,
        (cleared_lines, result): (usize, Result<(), CompletePieceDropError>),
    ) {
        self.stats.complete_piece_drop(cleared_lines);
        debug!(
            "locked {} at {:?}, cleared {cleared_lines} line(s)",
            locked.kind().as_char(),
            locked.position(),
        );
        if result.is_err() {
            self.session_state = SessionState::GameOver;
            info!(
                "game over: score {}, lines {}, pieces {}",
                self.stats.score(),
                self.stats.total_cleared_lines(),
                self.stats.completed_pieces(),
            );
        }
    }
}

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use log::info;

use crate::{
    SnakeBoardError,
    core::color::{ColorToken, segment_color},
};

/// Time between two automatic snake steps.
pub const SNAKE_STEP_INTERVAL: Duration = Duration::from_millis(120);

/// Length of a freshly spawned snake.
const INITIAL_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Direction {
    #[display("LEFT")]
    Left,
    #[display("RIGHT")]
    Right,
    #[display("UP")]
    Up,
    #[display("DOWN")]
    Down,
}

impl Direction {
    /// Returns the `(dx, dy)` step, with `y` growing downward.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// How the size of the snake board is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardDimensions {
    Fixed {
        width: usize,
        height: usize,
    },
    /// Whole terminal, minus the bottom row kept for the status line.
    #[default]
    TerminalDerived,
}

impl BoardDimensions {
    /// Resolves the board size for a terminal of `columns × rows` cells.
    #[must_use]
    pub fn resolve(self, columns: u16, rows: u16) -> (usize, usize) {
        match self {
            Self::Fixed { width, height } => (width, height),
            Self::TerminalDerived => (usize::from(columns), usize::from(rows).saturating_sub(1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SnakeCollision {
    #[display("wall hit")]
    Wall,
    #[display("self collision")]
    SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SnakeState {
    Running,
    GameOver(SnakeCollision),
}

/// A running snake game.
///
/// The snake moves one cell every [`SNAKE_STEP_INTERVAL`]. It grows by one
/// segment on every other step, and each growth step is worth one point.
/// Running into a wall or into its own body ends the game.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use termtris_engine::{Direction, SnakeSession};
///
/// let start = Instant::now();
/// let mut snake = SnakeSession::new(20, 10, start).unwrap();
/// snake.turn(Direction::Down);
/// snake.update(start + Duration::from_millis(120));
///
/// assert_eq!(snake.head(), (10, 6));
/// assert_eq!(snake.score(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SnakeSession {
    width: usize,
    height: usize,
    body: VecDeque<(usize, usize)>,
    direction: Direction,
    move_counter: u64,
    score: usize,
    state: SnakeState,
    last_step: Instant,
}

impl SnakeSession {
    /// Places a snake of length 3 in the middle of the board, heading right.
    pub fn new(width: usize, height: usize, now: Instant) -> Result<Self, SnakeBoardError> {
        let cx = width / 2;
        let cy = height / 2;
        if cx < INITIAL_LENGTH - 1 || height == 0 {
            return Err(SnakeBoardError::TooSmall { width, height });
        }
        let body = (0..INITIAL_LENGTH).map(|i| (cx - i, cy)).collect();
        info!("starting snake on a {width}x{height} board");
        Ok(Self {
            width,
            height,
            body,
            direction: Direction::Right,
            move_counter: 0,
            score: 0,
            state: SnakeState::Running,
            last_step: now,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the body segments, head first.
    pub fn body(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.body.iter().copied()
    }

    #[must_use]
    pub fn head(&self) -> (usize, usize) {
        self.body[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn state(&self) -> SnakeState {
        self.state
    }

    /// Returns the color of the body segment at `index` (0 is the head).
    #[must_use]
    pub fn segment_color(&self, index: usize) -> ColorToken {
        segment_color(index, self.body.len())
    }

    /// Changes the heading. Reversing straight into the body is ignored.
    pub fn turn(&mut self, direction: Direction) {
        if self.state.is_running() && direction != self.direction.opposite() {
            self.direction = direction;
        }
    }

    /// Advances the step timer to `now`, moving the snake if a step is due.
    pub fn update(&mut self, now: Instant) {
        if self.state.is_game_over()
            || now.saturating_duration_since(self.last_step) < SNAKE_STEP_INTERVAL
        {
            return;
        }
        self.last_step = now;
        self.step();
    }

    fn next_head(&self) -> Option<(usize, usize)> {
        let (x, y) = self.head();
        let (dx, dy) = self.direction.delta();
        let x = x.checked_add_signed(dx).filter(|&x| x < self.width)?;
        let y = y.checked_add_signed(dy).filter(|&y| y < self.height)?;
        Some((x, y))
    }

    fn step(&mut self) {
        self.move_counter += 1;

        let Some(head) = self.next_head() else {
            self.game_over(SnakeCollision::Wall);
            return;
        };
        // the tail has not moved yet, so stepping onto it is a collision too
        if self.body.contains(&head) {
            self.game_over(SnakeCollision::SelfCollision);
            return;
        }

        self.body.push_front(head);
        if self.move_counter % 2 == 0 {
            self.body.pop_back();
        } else {
            self.score += 1;
        }
    }

    fn game_over(&mut self, collision: SnakeCollision) {
        info!("snake game over ({collision}): score {}", self.score);
        self.state = SnakeState::GameOver(collision);
    }
}

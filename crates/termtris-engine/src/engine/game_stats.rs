use std::time::Duration;

/// Lines needed to advance one level.
const LINES_PER_LEVEL: usize = 10;
/// Fall interval at level 1.
const BASE_FALL_INTERVAL_MS: u64 = 500;
/// How much faster the piece falls per level.
const FALL_INTERVAL_STEP_MS: u64 = 40;
/// The fall interval never gets shorter than this.
const MIN_FALL_INTERVAL_MS: u64 = 100;

/// Points for a single lock-in: `cleared² × 100`.
///
/// 0 → 0, 1 → 100, 2 → 400, 3 → 900, 4 → 1600.
#[must_use]
pub const fn line_clear_score(cleared_lines: usize) -> usize {
    cleared_lines * cleared_lines * 100
}

/// Game statistics tracking score, lines cleared, and piece count.
///
/// - **Score**: `cleared² × 100` per lock-in
/// - **Level**: starts at 1 and goes up by one every 10 cleared lines
/// - **Fall interval**: 500 ms at level 1, 40 ms shorter per level, never
///   below 100 ms
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use termtris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(4);
///
/// assert_eq!(stats.score(), 1600);
/// assert_eq!(stats.level(), 1);
/// assert_eq!(stats.fall_interval(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the current level, `total_cleared_lines / 10 + 1`.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.total_cleared_lines / LINES_PER_LEVEL + 1
    }

    /// Returns the time between two automatic falls at the current level.
    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        let levels_gained = u64::try_from(self.level() - 1).unwrap_or(u64::MAX);
        let speedup = FALL_INTERVAL_STEP_MS.saturating_mul(levels_gained);
        let millis = BASE_FALL_INTERVAL_MS
            .saturating_sub(speedup)
            .max(MIN_FALL_INTERVAL_MS);
        Duration::from_millis(millis)
    }

    /// Returns the total number of pieces that have been locked into place.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of lock-ins by number of lines cleared.
    ///
    /// Index `n` counts the lock-ins that cleared exactly `n` lines.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Updates statistics after a piece lock-in that cleared `cleared_lines`
    /// lines (0 if none).
    pub const fn complete_piece_drop(&mut self, cleared_lines: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        self.score += line_clear_score(cleared_lines);
    }
}

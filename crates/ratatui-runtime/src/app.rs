use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for TUI applications.
///
/// Applications executed by `Runtime::run()` must implement this trait.
pub trait App {
    /// Initializes the application.
    ///
    /// Called at the start of `Runtime::run()`. Use this to configure the poll timeout.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    ///
    /// Checked before every frame.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, mouse, resize, etc.).
    ///
    /// Called at most once per frame, only when an event arrived in time.
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Advances time-driven state (called once per frame, after input).
    fn update(&mut self, runtime: &mut Runtime);

    /// Draws the whole screen (called once per frame, after `update`).
    fn draw(&self, frame: &mut Frame);
}

use std::{fmt, io, time::Duration};

use crossterm::event::{self, Event};

use crate::event::TuiEvent;

/// Poll timeout used until the application sets its own.
pub(super) const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Source of terminal events.
pub(super) trait EventSource: fmt::Debug {
    /// Waits up to `timeout` for one event.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal through crossterm.
#[derive(Debug, Default)]
pub(super) struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        event::read().map(Some)
    }
}

/// Bounded wait for input, one call per frame.
#[derive(Debug)]
pub(super) struct EventLoop {
    poll_timeout: Duration,
    source: Box<dyn EventSource>,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new(Box::new(CrosstermEvents))
    }
}

impl EventLoop {
    pub(super) fn new(source: Box<dyn EventSource>) -> Self {
        Self {
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            source,
        }
    }

    pub(super) fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }

    pub(super) fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    /// Returns the next event, or [`TuiEvent::Timeout`] if none arrived
    /// within the poll timeout.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        let event = self.source.poll_event(self.poll_timeout)?;
        Ok(event.map_or(TuiEvent::Timeout, TuiEvent::from))
    }
}

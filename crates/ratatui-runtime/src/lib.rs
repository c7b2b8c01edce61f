//! A minimal frame loop for ratatui applications.
//!
//! Every frame waits at most [`Runtime::poll_timeout`] for one terminal
//! event, hands it to the [`App`], lets the app advance its clock, and then
//! redraws the whole screen.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;

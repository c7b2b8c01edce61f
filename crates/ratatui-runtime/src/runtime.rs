use std::{io, time::Duration};

use crate::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Drives an [`App`] one frame at a time until it asks to exit.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    /// Creates a new Runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_source(source: Box<dyn crate::event_loop::EventSource>) -> Self {
        Self {
            events: EventLoop::new(source),
        }
    }

    /// Returns how long each frame waits for input.
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        self.events.poll_timeout()
    }

    /// Sets how long each frame waits for input.
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.events.set_poll_timeout(timeout);
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Until `app.should_exit()` returns true, runs frames:
    ///    - waits up to the poll timeout for an event and passes it to `app.handle_event()`
    ///    - calls `app.update()`
    ///    - calls `app.draw()`
    ///
    /// The terminal is restored before returning, including on error.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                self.run_frame(app, |app| {
                    terminal.draw(|f| app.draw(f))?;
                    Ok(())
                })?;
            }
            Ok(())
        })
    }

    fn run_frame<A, F>(&mut self, app: &mut A, draw: F) -> io::Result<()>
    where
        A: App,
        F: FnOnce(&A) -> io::Result<()>,
    {
        if let TuiEvent::Crossterm(event) = self.events.next()? {
            app.handle_event(self, event);
        }
        app.update(self);
        draw(app)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crossterm::event::{Event, KeyCode};
    use ratatui::Frame;

    use super::*;
    use crate::event_loop::tests::{ScriptedEvents, key};

    #[derive(Debug, Default)]
    struct RecordingApp {
        calls: Vec<String>,
        exit: bool,
    }

    impl App for RecordingApp {
        fn init(&mut self, runtime: &mut Runtime) {
            runtime.set_poll_timeout(Duration::from_millis(10));
        }

        fn should_exit(&self) -> bool {
            self.exit
        }

        fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
            if event == key(KeyCode::Char('q')) {
                self.exit = true;
            }
            self.calls.push("event".into());
        }

        fn update(&mut self, _runtime: &mut Runtime) {
            self.calls.push("update".into());
        }

        fn draw(&self, _frame: &mut Frame) {}
    }

    fn run_until_exit(runtime: &mut Runtime, app: &mut RecordingApp) -> usize {
        let mut frames = 0;
        while !app.should_exit() {
            runtime
                .run_frame(app, |_| {
                    frames += 1;
                    Ok(())
                })
                .unwrap();
        }
        frames
    }

    #[test]
    fn test_frame_order() {
        let source = ScriptedEvents {
            script: [None, Some(key(KeyCode::Left)), Some(key(KeyCode::Char('q')))].into(),
            ..ScriptedEvents::default()
        };
        let timeouts = Rc::clone(&source.timeouts);
        let mut runtime = Runtime::with_source(Box::new(source));
        let mut app = RecordingApp::default();
        app.init(&mut runtime);

        let frames = run_until_exit(&mut runtime, &mut app);

        assert_eq!(frames, 3);
        assert_eq!(
            app.calls,
            ["update", "event", "update", "event", "update"]
        );
        assert_eq!(*timeouts.borrow(), [Duration::from_millis(10); 3]);
    }

    #[test]
    fn test_draw_error_propagates() {
        let mut runtime = Runtime::with_source(Box::new(ScriptedEvents::default()));
        let mut app = RecordingApp::default();
        let result = runtime.run_frame(&mut app, |_| Err(io::Error::other("broken pipe")));
        assert!(result.is_err());
        assert_eq!(app.calls, ["update"]);
    }
}

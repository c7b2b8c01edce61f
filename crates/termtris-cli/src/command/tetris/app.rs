use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use log::info;
use ratatui::Frame;
use ratatui_runtime::{App, Runtime};
use termtris_engine::{GameAction, GameSession, PieceSeed};

use crate::view::widgets::TetrisDisplay;

/// How long each frame waits for a key.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Action(GameAction),
    Quit,
}

fn key_input(key: KeyEvent) -> Option<Input> {
    let input = match key.code {
        KeyCode::Left | KeyCode::Char('a') => Input::Action(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Input::Action(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') => Input::Action(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') => Input::Action(GameAction::RotateClockwise),
        KeyCode::Char(' ') => Input::Action(GameAction::HardDrop),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => return None,
    };
    Some(input)
}

#[derive(Debug)]
pub struct TetrisApp {
    session: GameSession,
    is_exiting: bool,
}

impl TetrisApp {
    pub fn new(seed: Option<PieceSeed>) -> Self {
        let now = Instant::now();
        let session = match seed {
            Some(seed) => GameSession::with_seed(seed, now),
            None => GameSession::new(now),
        };
        Self {
            session,
            is_exiting: false,
        }
    }

    /// Returns the score if the game ended by game over rather than by quitting.
    pub fn final_score(&self) -> Option<usize> {
        self.session
            .session_state()
            .is_game_over()
            .then(|| self.session.stats().score())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // after game over, any key leaves the final screen
        if self.session.session_state().is_game_over() {
            self.is_exiting = true;
            return;
        }
        match key_input(key) {
            Some(Input::Action(action)) => self.session.apply_action(action),
            Some(Input::Quit) => {
                info!("quit at score {}", self.session.stats().score());
                self.is_exiting = true;
            }
            None => {}
        }
    }
}

impl App for TetrisApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_poll_timeout(POLL_TIMEOUT);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        if let Some(key) = event.as_key_press_event() {
            self.handle_key(key);
        }
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.session.update(Instant::now());
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(TetrisDisplay::new(&self.session), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        let cases = [
            (KeyCode::Left, Input::Action(GameAction::MoveLeft)),
            (KeyCode::Char('a'), Input::Action(GameAction::MoveLeft)),
            (KeyCode::Right, Input::Action(GameAction::MoveRight)),
            (KeyCode::Down, Input::Action(GameAction::SoftDrop)),
            (KeyCode::Up, Input::Action(GameAction::RotateClockwise)),
            (KeyCode::Char('w'), Input::Action(GameAction::RotateClockwise)),
            (KeyCode::Char(' '), Input::Action(GameAction::HardDrop)),
            (KeyCode::Char('q'), Input::Quit),
            (KeyCode::Esc, Input::Quit),
        ];
        for (code, input) in cases {
            assert_eq!(key_input(press(code)), Some(input), "{code:?}");
        }
        assert_eq!(key_input(press(KeyCode::Char('x'))), None);
        assert_eq!(key_input(press(KeyCode::Char('c'))), None);
        assert_eq!(
            key_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Input::Quit)
        );
    }

    #[test]
    fn test_quit_key_exits_without_final_score() {
        let mut app = TetrisApp::new(Some(PieceSeed::new(1)));
        let mut runtime = Runtime::new();
        app.handle_event(&mut runtime, Event::Key(press(KeyCode::Char('q'))));
        assert!(app.should_exit());
        assert_eq!(app.final_score(), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = TetrisApp::new(Some(PieceSeed::new(1)));
        let mut runtime = Runtime::new();
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press(KeyCode::Char('q'))
        };
        app.handle_event(&mut runtime, Event::Key(release));
        assert!(!app.should_exit());
    }

    #[test]
    fn test_game_over_waits_for_any_key() {
        let mut app = TetrisApp::new(Some(PieceSeed::new(1)));
        let mut runtime = Runtime::new();
        while app.session.session_state().is_playing() {
            app.handle_key(press(KeyCode::Char(' ')));
        }
        assert!(!app.should_exit());
        assert!(app.final_score().is_some());

        app.handle_key(press(KeyCode::Left));
        assert!(app.should_exit());
        app.init(&mut runtime);
        assert_eq!(runtime.poll_timeout(), POLL_TIMEOUT);
    }
}

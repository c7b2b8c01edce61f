use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use log::info;
use ratatui::Frame;
use ratatui_runtime::{App, Runtime};
use termtris_engine::{Direction, SnakeCollision, SnakeSession, SnakeState};

use crate::view::widgets::SnakeDisplay;

/// How long each frame waits for a key.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Turn(Direction),
    Quit,
}

fn key_input(key: KeyEvent) -> Option<Input> {
    let input = match key.code {
        KeyCode::Left | KeyCode::Char('a') => Input::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Input::Turn(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') => Input::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Input::Turn(Direction::Down),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => return None,
    };
    Some(input)
}

#[derive(Debug)]
pub struct SnakeApp {
    session: SnakeSession,
    is_exiting: bool,
}

impl SnakeApp {
    pub fn new(session: SnakeSession) -> Self {
        Self {
            session,
            is_exiting: false,
        }
    }

    /// Returns how the game ended and the score, unless the player quit.
    pub fn final_result(&self) -> Option<(SnakeCollision, usize)> {
        match self.session.state() {
            SnakeState::Running => None,
            SnakeState::GameOver(collision) => Some((collision, self.session.score())),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.session.state().is_game_over() {
            self.is_exiting = true;
            return;
        }
        match key_input(key) {
            Some(Input::Turn(direction)) => self.session.turn(direction),
            Some(Input::Quit) => {
                info!("quit at score {}", self.session.score());
                self.is_exiting = true;
            }
            None => {}
        }
    }
}

impl App for SnakeApp {
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
        frame.render_widget(SnakeDisplay::new(&self.session), frame.area());
    }
}

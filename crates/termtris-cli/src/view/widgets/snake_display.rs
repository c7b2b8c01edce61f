use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    text::Line,
    widgets::Widget,
};
use termtris_engine::{SnakeSession, SnakeState};

use super::style;

/// The snake board with a one-line status bar underneath.
///
/// Each board cell is a single terminal column. Segments are drawn as `█`
/// in a rainbow running from the head to the tail.
#[derive(Debug)]
pub struct SnakeDisplay<'a> {
    session: &'a SnakeSession,
}

impl<'a> SnakeDisplay<'a> {
    pub fn new(session: &'a SnakeSession) -> Self {
        Self { session }
    }

    fn status_line(&self) -> Line<'static> {
        let session = self.session;
        match session.state() {
            SnakeState::Running => Line::styled(
                format!(
                    "Score: {}   Dir: {}   q: quit",
                    session.score(),
                    session.direction()
                ),
                style::DEFAULT,
            ),
            SnakeState::GameOver(collision) => Line::styled(
                format!(
                    "Game Over – {collision}. Score: {}   press any key",
                    session.score()
                ),
                style::GAME_OVER,
            ),
        }
    }
}

impl Widget for SnakeDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let height = u16::try_from(self.session.height()).unwrap_or(u16::MAX);
        let [board_area, status_area] =
            Layout::vertical([Constraint::Length(height), Constraint::Length(1)]).areas(area);

        buf.set_style(board_area, style::EMPTY);
        for (index, (x, y)) in self.session.body().enumerate() {
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if x >= board_area.width || y >= board_area.height {
                continue;
            }
            if let Some(cell) = buf.cell_mut((board_area.x + x, board_area.y + y)) {
                cell.set_symbol("█")
                    .set_style(style::glyph(self.session.segment_color(index)));
            }
        }

        self.status_line().render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::style::Color;

    use super::*;
    use crate::view::widgets::test_util::buffer_lines;

    #[test]
    fn test_snake_and_status_line() {
        let session = SnakeSession::new(10, 4, Instant::now()).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 5));
        SnakeDisplay::new(&session).render(buf.area, &mut buf);

        // body is (5, 2), (4, 2), (3, 2)
        assert_eq!(buf[(5, 2)].symbol(), "█");
        assert_eq!(buf[(5, 2)].fg, Color::Indexed(196));
        assert_eq!(buf[(3, 2)].fg, Color::Indexed(201));
        assert_eq!(buf[(6, 2)].symbol(), " ");
        assert_eq!(buf[(6, 2)].bg, Color::Black);

        let lines = buffer_lines(&buf);
        assert!(lines[4].starts_with("Score: 0   Dir: RIGHT   q: quit"));
    }

    #[test]
    fn test_game_over_status() {
        let start = Instant::now();
        let mut session = SnakeSession::new(8, 2, start).unwrap();
        let mut now = start;
        while session.state().is_running() {
            now += Duration::from_millis(120);
            session.update(now);
        }
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 3));
        SnakeDisplay::new(&session).render(buf.area, &mut buf);
        let lines = buffer_lines(&buf);
        assert!(lines[2].starts_with("Game Over – wall hit. Score: 2"));
    }
}

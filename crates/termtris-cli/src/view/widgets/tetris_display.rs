use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Color,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use termtris_engine::GameSession;

use super::{BoardDisplay, KeyBinding, KeyBindingDisplay, StatsDisplay, style};

const CONTROLS: &[KeyBinding] = &[
    (&["←", "a"], "Left"),
    (&["→", "d"], "Right"),
    (&["↓", "s"], "Soft drop"),
    (&["↑", "w"], "Rotate"),
    (&["Space"], "Hard drop"),
    (&["q", "Esc"], "Quit"),
];

/// Full game screen: the board, a stats panel and the controls, plus a
/// popup with the final score once the game is over.
#[derive(Debug)]
pub struct TetrisDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> TetrisDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

impl Widget for TetrisDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let is_game_over = self.session.session_state().is_game_over();
        let border_style = if is_game_over { Color::Red } else { Color::White };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT)
        };

        let board = self.session.render_board();
        let game_board = BoardDisplay::new(&board).block(
            Block::bordered()
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let stats = StatsDisplay::new(self.session).block(panel("STATS"));
        let controls = KeyBindingDisplay::new(CONTROLS).block(panel("CONTROLS"));

        let [board_column, side_column] = Layout::horizontal([
            Constraint::Length(game_board.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);
        let [stats_area, controls_area] = Layout::vertical([
            Constraint::Length(stats.height()),
            Constraint::Length(controls.height()),
        ])
        .areas(side_column);

        game_board.render(board_area, buf);
        stats.render(stats_area, buf);
        controls.render(controls_area, buf);

        if is_game_over {
            let lines = [
                format!("Game Over! Final Score: {}", self.session.stats().score()),
                "Press any key to exit".to_owned(),
            ];
            let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;
            let popup_style = style::GAME_OVER;
            let block = Block::new().style(popup_style);
            let text = Text::from_iter(lines).style(popup_style).centered();
            let popup_area = area.centered(
                Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX)),
                Constraint::Length(4),
            );
            let inner = block.inner(popup_area);
            Clear.render(popup_area, buf);
            block.render(popup_area, buf);
            text.render(inner.centered_vertically(Constraint::Length(2)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use termtris_engine::{GameAction, PieceSeed};

    use super::*;
    use crate::view::widgets::test_util::buffer_lines;

    fn render(session: &GameSession) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        TetrisDisplay::new(session).render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_playing_screen() {
        let session = GameSession::with_seed(PieceSeed::new(9), Instant::now());
        let screen = render(&session).concat();
        assert!(screen.contains("STATS"));
        assert!(screen.contains("CONTROLS"));
        assert!(screen.contains("Hard drop"));
        assert!(!screen.contains("Game Over!"));
    }

    #[test]
    fn test_game_over_popup() {
        let mut session = GameSession::with_seed(PieceSeed::new(9), Instant::now());
        while session.session_state().is_playing() {
            session.apply_action(GameAction::HardDrop);
        }
        let screen = render(&session).concat();
        assert!(screen.contains("Game Over! Final Score: 0"));
        assert!(screen.contains("Press any key to exit"));
    }
}

use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, cell_display::*, key_binding_display::*, snake_display::*,
    stats_display::*, tetris_display::*,
};

mod board_display;
mod cell_display;
mod key_binding_display;
mod snake_display;
mod stats_display;
mod tetris_display;

mod color {
    use ratatui::style::Color;
    use termtris_engine::ColorToken;

    pub const BLACK: Color = Color::Black;
    pub const WHITE: Color = Color::White;
    pub const RED: Color = Color::Red;

    /// Maps an engine color token onto the terminal's 256-color palette.
    pub const fn from_token(token: ColorToken) -> Color {
        Color::Indexed(token.index())
    }
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};
    use termtris_engine::ColorToken;

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED).add_modifier(Modifier::BOLD);

    /// Solid block in the token's color.
    pub const fn block(token: ColorToken) -> Style {
        bg_only(color::from_token(token))
    }

    /// Glyph drawn in the token's color on black.
    pub const fn glyph(token: ColorToken) -> Style {
        fg_bg(color::from_token(token), color::BLACK)
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}

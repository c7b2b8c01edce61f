use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use termtris_engine::Cell;

use super::style;

/// One board cell, two terminal columns wide so that cells look square.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
}

impl CellDisplay {
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self::new(style::EMPTY),
            Cell::Occupied(kind) => Self::new(style::block(kind.color())),
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Paragraph fills the whole area with the style, not just the text
        Paragraph::new("").style(self.style).render(area, buf);
    }
}

use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use termtris_engine::Board;

use super::CellDisplay;

/// Draws a [`Board`] snapshot, one [`CellDisplay`] per cell.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        Board::WIDTH as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        Board::HEIGHT as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..Board::WIDTH).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints =
            (0..Board::HEIGHT).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ Board::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::WIDTH }>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, self.board.rows()) {
            for (grid_cell, cell) in iter::zip(grid_row, row) {
                CellDisplay::from_cell(*cell).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{style::Color, widgets::Block};
    use termtris_engine::{Cell, PieceKind};

    use super::*;

    #[test]
    fn test_cells_are_two_columns_wide() {
        let mut board = Board::INITIAL;
        board.fill_cell_at(0, 19, Cell::Occupied(PieceKind::O));
        board.fill_cell_at(9, 0, Cell::Occupied(PieceKind::L));
        let display = BoardDisplay::new(&board);
        assert_eq!((display.width(), display.height()), (20, 20));

        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 20));
        display.render(buf.area, &mut buf);

        assert_eq!(buf[(0, 19)].bg, Color::Indexed(3));
        assert_eq!(buf[(1, 19)].bg, Color::Indexed(3));
        assert_eq!(buf[(18, 0)].bg, Color::Indexed(208));
        assert_eq!(buf[(19, 0)].bg, Color::Indexed(208));
        assert_eq!(buf[(2, 19)].bg, Color::Black);
        assert_eq!(buf[(10, 10)].bg, Color::Black);
    }

    #[test]
    fn test_bordered_size() {
        let board = Board::INITIAL;
        let display = BoardDisplay::new(&board).block(Block::bordered());
        assert_eq!((display.width(), display.height()), (22, 22));

        let mut buf = Buffer::empty(Rect::new(0, 0, 22, 22));
        let area = buf.area;
        display.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(1, 1)].bg, Color::Black);
    }
}

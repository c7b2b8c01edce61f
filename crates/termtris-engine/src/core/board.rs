use super::piece::{Piece, PieceKind};

/// Playfield width in cells.
pub const BOARD_WIDTH: usize = 10;
/// Playfield height in cells.
pub const BOARD_HEIGHT: usize = 20;

/// A single cell of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Cell {
    /// No block.
    #[default]
    Empty,
    /// Block left behind by a locked piece (or the falling piece in a render
    /// snapshot).
    Occupied(PieceKind),
}

type Row = [Cell; BOARD_WIDTH];

const EMPTY_ROW: Row = [Cell::Empty; BOARD_WIDTH];

/// The 10×20 playfield.
///
/// Row 0 is the top of the field; pieces spawn there and fall toward row
/// [`Board::HEIGHT`]` - 1`. Coordinates passed in by callers are signed so
/// that out-of-range candidates produced by movement can be rejected by
/// [`Board::can_place`] instead of wrapping.
///
/// # Example
///
/// ```
/// use termtris_engine::{Board, Piece, PieceKind};
///
/// let mut board = Board::INITIAL;
/// let piece = Piece::new(PieceKind::O).simulate_drop_position(&board);
/// assert!(board.can_place_piece(piece));
/// board.fill_piece(piece);
/// assert!(!board.can_place_piece(piece));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const INITIAL: Self = Self {
        rows: [EMPTY_ROW; BOARD_HEIGHT],
    };

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < Self::WIDTH)?;
        let y = usize::try_from(y).ok().filter(|&y| y < Self::HEIGHT)?;
        Some((x, y))
    }

    /// Returns the cell at `(x, y)`, or `None` outside the board.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let (x, y) = Self::index(x, y)?;
        Some(self.rows[y][x])
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.rows.iter()
    }

    /// Returns `true` iff every cell is inside the board and empty.
    pub fn can_place<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        cells
            .into_iter()
            .all(|(x, y)| self.cell(x, y).is_some_and(|c| c.is_empty()))
    }

    #[must_use]
    pub fn can_place_piece(&self, piece: Piece) -> bool {
        self.can_place(piece.occupied_positions())
    }

    /// Writes `kind` into every given cell.
    ///
    /// The cells must have been accepted by [`Self::can_place`]; cells outside
    /// the board are skipped rather than re-validated.
    pub fn lock<I>(&mut self, cells: I, kind: PieceKind)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        for (x, y) in cells {
            self.fill_cell_at(x, y, Cell::Occupied(kind));
        }
    }

    /// Fills the piece's cells on the board with the piece's type.
    pub fn fill_piece(&mut self, piece: Piece) {
        self.lock(piece.occupied_positions(), piece.kind());
    }

    /// Overwrites a single cell. Out-of-range coordinates are ignored.
    pub fn fill_cell_at(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some((x, y)) = Self::index(x, y) {
            self.rows[y][x] = cell;
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// All full rows found in one pass are cleared together. Remaining rows
    /// keep their relative order and settle at the bottom; the same number of
    /// empty rows enter at the top.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut count = 0;
        for y in (0..Self::HEIGHT).rev() {
            if self.rows[y].iter().all(|c| c.is_occupied()) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill(EMPTY_ROW);
        count
    }
}

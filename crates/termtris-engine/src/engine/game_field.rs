use crate::{
    CompletePieceDropError, PieceCollisionError,
    core::{
        board::Board,
        piece::{Piece, PieceKind},
    },
};

use super::piece_generator::{PieceGenerator, PieceSeed};

/// The board together with the piece currently falling on it.
///
/// `GameField` is the only writer of its board. Every movement or rotation
/// builds a candidate [`Piece`] and swaps it in only if
/// [`Board::can_place_piece`] accepts it, so the falling piece never leaves
/// the board and never overlaps a locked cell.
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    falling_piece: Piece,
    generator: PieceGenerator,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new()
    }
}

impl GameField {
    /// Creates an empty field with a randomly seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::from_generator(PieceGenerator::new())
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::from_generator(PieceGenerator::with_seed(seed))
    }

    fn from_generator(mut generator: PieceGenerator) -> Self {
        // Spawning on an empty board always succeeds.
        let falling_piece = Piece::new(generator.next_kind());
        Self {
            board: Board::INITIAL,
            falling_piece,
            generator,
        }
    }

    /// Creates a field on a pre-filled board and spawns the first piece.
    ///
    /// Fails when the board has no room at the spawn position.
    pub fn with_board(board: Board, seed: PieceSeed) -> Result<Self, PieceCollisionError> {
        let mut generator = PieceGenerator::with_seed(seed);
        let falling_piece = Piece::new(generator.next_kind());
        if !board.can_place_piece(falling_piece) {
            return Err(PieceCollisionError);
        }
        Ok(Self {
            board,
            falling_piece,
            generator,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.falling_piece
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.generator.seed()
    }

    /// Replaces the falling piece if it fits on the board.
    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if !self.board.can_place_piece(piece) {
            return Err(PieceCollisionError);
        }
        self.falling_piece = piece;
        Ok(())
    }

    /// Replaces the falling piece with a fresh `kind` at the spawn position.
    ///
    /// On failure the previous piece stays in place and the caller should
    /// treat the game as over.
    pub fn spawn(&mut self, kind: PieceKind) -> Result<(), PieceCollisionError> {
        self.set_falling_piece(Piece::new(kind))
    }

    pub fn try_move(&mut self, dx: i32, dy: i32) -> Result<(), PieceCollisionError> {
        self.set_falling_piece(self.falling_piece.moved(dx, dy))
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(-1, 0)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(1, 0)
    }

    pub fn try_soft_drop(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(0, 1)
    }

    /// Rotates clockwise in place. There is no wall kick: if the rotated
    /// piece collides at the current position, the rotation is rejected.
    pub fn try_rotate_right(&mut self) -> Result<(), PieceCollisionError> {
        self.set_falling_piece(self.falling_piece.rotated_right())
    }

    #[must_use]
    pub fn simulate_drop_position(&self) -> Piece {
        self.falling_piece.simulate_drop_position(&self.board)
    }

    /// Drops the piece as far as it goes, then locks it in.
    pub fn hard_drop(&mut self) -> (usize, Result<(), CompletePieceDropError>) {
        while self.try_soft_drop().is_ok() {}
        self.complete_piece_drop()
    }

    /// Locks the falling piece into the board, clears full lines and spawns
    /// the next piece.
    ///
    /// Returns the number of cleared lines, and an error if the new piece
    /// has no room (game over).
    pub fn complete_piece_drop(&mut self) -> (usize, Result<(), CompletePieceDropError>) {
        self.board.fill_piece(self.falling_piece);
        let cleared_lines = self.board.clear_full_lines();

        let next = self.generator.next_kind();
        if self.spawn(next).is_err() {
            return (
                cleared_lines,
                Err(CompletePieceDropError::NewPieceCollision),
            );
        }

        (cleared_lines, Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, PiecePosition, PieceRotation};

    use super::*;

    fn field_with(kind: PieceKind) -> GameField {
        let mut field = GameField::with_seed(PieceSeed::new(0));
        field.spawn(kind).unwrap();
        field
    }

    fn assert_piece_in_bounds(field: &GameField) {
        for (x, y) in field.falling_piece().occupied_positions() {
            assert!((0..Board::WIDTH as i32).contains(&x), "x = {x}");
            assert!((0..Board::HEIGHT as i32).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn test_spawn_every_kind_on_empty_board() {
        for kind in PieceKind::ALL {
            let field = field_with(kind);
            assert_eq!(field.falling_piece().kind(), kind);
            assert_eq!(field.falling_piece().position(), PiecePosition::new(3, 0));
            assert_eq!(field.falling_piece().rotation(), PieceRotation::default());
        }
    }

    #[test]
    fn test_move_stops_at_walls() {
        for kind in PieceKind::ALL {
            let mut field = field_with(kind);
            while field.try_move_left().is_ok() {}
            assert_piece_in_bounds(&field);
            let min_x = field.falling_piece().occupied_positions().map(|(x, _)| x).min();
            assert_eq!(min_x, Some(0));

            while field.try_move_right().is_ok() {}
            assert_piece_in_bounds(&field);
            let max_x = field.falling_piece().occupied_positions().map(|(x, _)| x).max();
            assert_eq!(max_x, Some(9));
        }
    }

    #[test]
    fn test_failed_move_leaves_piece_unchanged() {
        let mut field = field_with(PieceKind::I);
        while field.try_move_left().is_ok() {}
        let before = field.falling_piece();
        assert!(field.try_move_left().is_err());
        assert_eq!(field.falling_piece(), before);
    }

    #[test]
    fn test_vertical_i_reaches_left_wall_with_negative_anchor() {
        let mut field = field_with(PieceKind::I);
        field.try_soft_drop().unwrap();
        field.try_rotate_right().unwrap();
        field.try_rotate_right().unwrap();
        field.try_rotate_right().unwrap();
        while field.try_move_left().is_ok() {}
        // rotation 3 occupies local column 1
        assert_eq!(field.falling_piece().position().x(), -1);
        assert_piece_in_bounds(&field);
    }

    #[test]
    fn test_rotation_without_wall_kick() {
        // Vertical I against the right wall cannot turn horizontal.
        let mut field = field_with(PieceKind::I);
        field.try_rotate_right().unwrap();
        while field.try_move_right().is_ok() {}
        let before = field.falling_piece();
        assert!(field.try_rotate_right().is_err());
        assert_eq!(field.falling_piece(), before);
    }

    #[test]
    fn test_rotation_blocked_by_locked_cells() {
        let mut board = Board::INITIAL;
        // the T piece's rotation 1 needs (4, 2)
        board.fill_cell_at(4, 2, Cell::Occupied(PieceKind::Z));
        let mut field = GameField::with_board(board, PieceSeed::new(0)).unwrap();
        field.set_falling_piece(Piece::new(PieceKind::T)).unwrap();
        assert!(field.try_rotate_right().is_err());
        assert_eq!(field.falling_piece().rotation(), PieceRotation::default());
    }

    #[test]
    fn test_rotation_closure_in_open_space() {
        for kind in PieceKind::ALL {
            let mut field = field_with(kind);
            field.try_move(0, 5).unwrap();
            let before = field.falling_piece();
            for _ in 0..4 {
                field.try_rotate_right().unwrap();
            }
            assert_eq!(field.falling_piece(), before);
        }
    }

    #[test]
    fn test_o_piece_drop_scenario() {
        let mut field = field_with(PieceKind::O);
        assert_eq!(field.falling_piece().position(), PiecePosition::new(3, 0));

        let mut steps = 0;
        while field.try_soft_drop().is_ok() {
            steps += 1;
        }
        assert_eq!(steps, 18);
        let landed = field.falling_piece();

        let (cleared, result) = field.complete_piece_drop();
        assert_eq!(cleared, 0);
        assert!(result.is_ok());
        for (x, y) in landed.occupied_positions() {
            assert!(y == 18 || y == 19);
            assert_eq!(field.board().cell(x, y), Some(Cell::Occupied(PieceKind::O)));
        }
    }

    #[test]
    fn test_hard_drop_locks_at_simulated_position() {
        let mut field = field_with(PieceKind::S);
        let expected = field.simulate_drop_position();
        let (cleared, result) = field.hard_drop();
        assert_eq!(cleared, 0);
        assert!(result.is_ok());
        for (x, y) in expected.occupied_positions() {
            assert_eq!(field.board().cell(x, y), Some(Cell::Occupied(PieceKind::S)));
        }
        assert_eq!(field.falling_piece().position(), PiecePosition::SPAWN_POSITION);
    }

    #[test]
    fn test_lock_in_clears_completed_line() {
        let mut board = Board::INITIAL;
        // bottom row full except columns 4 and 5
        for x in (0..10).filter(|x| *x != 4 && *x != 5) {
            board.fill_cell_at(x, 19, Cell::Occupied(PieceKind::J));
        }
        let mut field = GameField::with_board(board, PieceSeed::new(0)).unwrap();
        field.set_falling_piece(Piece::new(PieceKind::O)).unwrap();

        let (cleared, result) = field.hard_drop();
        assert_eq!(cleared, 1);
        assert!(result.is_ok());
        // the top half of the O remains, shifted down into the bottom row
        assert_eq!(field.board().cell(4, 19), Some(Cell::Occupied(PieceKind::O)));
        assert_eq!(field.board().cell(5, 19), Some(Cell::Occupied(PieceKind::O)));
        assert_eq!(field.board().cell(0, 19), Some(Cell::Empty));
    }

    #[test]
    fn test_spawn_collision_is_game_over() {
        let mut board = Board::INITIAL;
        for x in 0..10 {
            board.fill_cell_at(x, 2, Cell::Occupied(PieceKind::L));
        }
        for x in 1..10 {
            board.fill_cell_at(x, 1, Cell::Occupied(PieceKind::L));
        }
        // every spawn shape needs a cell in row 1
        assert!(GameField::with_board(board.clone(), PieceSeed::new(0)).is_err());

        let mut board = Board::INITIAL;
        for x in 0..9 {
            board.fill_cell_at(x, 3, Cell::Occupied(PieceKind::L));
        }
        let mut field = GameField::with_board(board, PieceSeed::new(0)).unwrap();
        field.set_falling_piece(Piece::new(PieceKind::O)).unwrap();
        // O locks on rows 1..=2; every spawn shape needs (4, 1)
        let (_, result) = field.hard_drop();
        assert!(matches!(
            result,
            Err(CompletePieceDropError::NewPieceCollision)
        ));
    }
}

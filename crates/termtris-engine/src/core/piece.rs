use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::{
    board::{BOARD_WIDTH, Board},
    color::ColorToken,
};

/// Column of the spawn anchor: the 4×4 piece frame centered horizontally.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const PIECE_SPAWN_X: i32 = (BOARD_WIDTH / 2) as i32 - 2;
/// Row of the spawn anchor: the 4×4 piece frame is top-aligned.
pub const PIECE_SPAWN_Y: i32 = 0;

/// The cells a piece occupies in one orientation, as `(dx, dy)` offsets
/// inside its 4×4 local frame.
pub type RotationState = [(u8, u8); 4];

/// A falling piece (tetromino) with position, rotation, and type.
///
/// Pieces are immutable values: movement and rotation return a new `Piece`,
/// which the owner swaps in only after the board accepted it.
///
/// # Coordinate System
///
/// - The position is the board coordinate of the local `(0, 0)` offset
/// - X increases rightward (columns), Y increases downward (rows)
/// - The position may be negative or past the right edge while every
///   occupied cell is still inside the board (e.g. a vertical I against the
///   left wall)
///
/// # Example
///
/// ```
/// use termtris_engine::{Piece, PieceKind};
///
/// let piece = Piece::new(PieceKind::T);
/// let moved = piece.right();
/// let rotated = moved.rotated_right();
/// assert_eq!(rotated.position().x(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    position: PiecePosition,
    rotation: PieceRotation,
    kind: PieceKind,
}

impl Piece {
    /// Creates a piece at the spawn position in its spawn orientation.
    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        Self {
            position: PiecePosition::SPAWN_POSITION,
            rotation: PieceRotation::default(),
            kind,
        }
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the absolute board coordinates of the four occupied cells.
    pub fn occupied_positions(self) -> impl Iterator<Item = (i32, i32)> {
        let PiecePosition { x, y } = self.position;
        self.kind
            .shape(self.rotation)
            .iter()
            .map(move |&(dx, dy)| (x + i32::from(dx), y + i32::from(dy)))
    }

    #[must_use]
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..*self
        }
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.moved(-1, 0)
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.moved(1, 0)
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.moved(0, 1)
    }

    #[must_use]
    pub fn rotated_right(&self) -> Self {
        Self {
            rotation: self.rotation.rotated_right(),
            ..*self
        }
    }

    /// Returns where this piece would come to rest if dropped straight down.
    #[must_use]
    pub fn simulate_drop_position(&self, board: &Board) -> Self {
        let mut dropped = *self;
        while board.can_place_piece(dropped.down()) {
            dropped = dropped.down();
        }
        dropped
    }
}

/// Board coordinate of a piece's local `(0, 0)` offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePosition {
    x: i32,
    y: i32,
}

impl PiecePosition {
    pub const SPAWN_POSITION: Self = Self::new(PIECE_SPAWN_X, PIECE_SPAWN_Y);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Rotation state of a piece.
///
/// - `0`: spawn orientation
/// - `1`: 90° clockwise
/// - `2`: 180°
/// - `3`: 270° clockwise
///
/// Rotation operations wrap around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRotation(u8);

impl PieceRotation {
    /// Creates a rotation state, wrapping `n` into `0..4`.
    #[must_use]
    pub const fn new(n: u8) -> Self {
        Self(n % 4)
    }

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

/// Uniform, independent choice among the seven kinds.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Returns the four rotation states of this kind, in clockwise order.
    #[must_use]
    pub fn rotations(self) -> &'static [RotationState; 4] {
        &PIECE_SHAPES[self as usize]
    }

    /// Returns the occupied offsets for the given rotation.
    #[must_use]
    pub fn shape(self, rotation: PieceRotation) -> &'static RotationState {
        &self.rotations()[rotation.index()]
    }

    /// Returns the display color of this kind as a 256-color palette index.
    #[must_use]
    pub const fn color(self) -> ColorToken {
        match self {
            PieceKind::I => ColorToken::CYAN,
            PieceKind::O => ColorToken::YELLOW,
            PieceKind::T => ColorToken::MAGENTA,
            PieceKind::S => ColorToken::GREEN,
            PieceKind::Z => ColorToken::RED,
            PieceKind::J => ColorToken::BLUE,
            PieceKind::L => ColorToken::ORANGE,
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

static PIECE_SHAPES: [[RotationState; 4]; PieceKind::LEN] = [
    // I-piece
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O-piece: rotation is degenerate
    [[(1, 0), (2, 0), (1, 1), (2, 1)]; 4],
    // T-piece
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S-piece
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z-piece
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J-piece
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L-piece
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

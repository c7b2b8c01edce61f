//! Board geometry, piece shapes and display colors.
//!
//! Everything here is plain data with no notion of time: the tetromino shape
//! catalog ([`PieceKind`]), falling pieces ([`Piece`]), the playfield
//! ([`Board`]) and the palette tokens handed to renderers ([`ColorToken`]).

pub use self::{board::*, color::*, piece::*};

pub(crate) mod board;
pub(crate) mod color;
pub(crate) mod piece;

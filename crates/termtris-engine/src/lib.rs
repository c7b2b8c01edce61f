pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding when setting falling piece")]
pub struct PieceCollisionError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CompletePieceDropError {
    #[display("new piece collides with the board at the spawn position")]
    NewPieceCollision,
}

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnakeBoardError {
    #[display("board of {width}x{height} cells is too small for the initial snake")]
    TooSmall { width: usize, height: usize },
}

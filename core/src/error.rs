use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be positive")]
    EmptyBoard,
    #[error("mine count must be positive")]
    NoMines,
    #[error("{mines} mines do not fit in a board of {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: Coord, y: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;

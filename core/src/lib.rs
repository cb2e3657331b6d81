#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod types;

/// Startup configuration: `width`, `height` and `mines`, all positive, with
/// `mines` strictly below the cell count. Construction is the only place the
/// configuration error taxonomy applies; everything built from a valid config
/// is well-formed afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl BoardConfig {
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines == 0 {
            return Err(GameError::NoMines);
        }
        let cells = mult(width, height);
        if mines >= cells {
            return Err(GameError::TooManyMines { mines, cells });
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    /// 8x8, 10 mines.
    pub const fn beginner() -> Self {
        Self {
            width: 8,
            height: 8,
            mines: 10,
        }
    }

    /// 16x16, 40 mines.
    pub const fn intermediate() -> Self {
        Self {
            width: 16,
            height: 16,
            mines: 40,
        }
    }

    /// 30x16, 99 mines.
    pub const fn expert() -> Self {
        Self {
            width: 30,
            height: 16,
            mines: 99,
        }
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

/// Immutable mine placement plus the per-cell adjacent-mine counts, both fixed
/// at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mines: Array2<bool>,
    counts: Array2<u8>,
    mine_count: CellCount,
}

impl Minefield {
    /// Builds a minefield from a mine mask, counting neighbors once up front.
    /// Each axis of the mask must fit in `Coord`.
    pub fn from_mask(mines: Array2<bool>) -> Self {
        let dim = mines.dim();
        let size: Coord2 = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        let counts = Array2::from_shape_fn(dim, |(x, y)| {
            neighbors((x as Coord, y as Coord), size)
                .filter(|&pos| mines[pos.nd()])
                .count() as u8
        });
        let mine_count = mines.iter().filter(|&&mine| mine).count() as CellCount;
        Self {
            mines,
            counts,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines = Array2::from_elem(size.nd(), false);
        for &(x, y) in mine_coords {
            if x >= size.0 || y >= size.1 {
                return Err(GameError::OutOfBounds { x, y });
            }
            mines[(x, y).nd()] = true;
        }
        Ok(Self::from_mask(mines))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (width, height) = self.size();
        if coords.0 < width && coords.1 < height {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                x: coords.0,
                y: coords.1,
            })
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mines.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.counts[coords.nd()]
    }

    pub(crate) fn grid_dim(&self) -> (usize, usize) {
        self.mines.dim()
    }
}

impl Index<Coord2> for Minefield {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mines[coords.nd()]
    }
}

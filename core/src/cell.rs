use serde::{Deserialize, Serialize};

use crate::Coord;

/// Player-driven state of one grid position. A cell is never both flagged and
/// uncovered; uncovering is one-way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Covered,
    Flagged,
    Uncovered,
}

impl CellState {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Covered
    }
}

/// Read model for a single cell, as consumed by a renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub x: Coord,
    pub y: Coord,
    pub is_mine: bool,
    pub adjacent_mines: u8,
    pub is_uncovered: bool,
    pub is_flagged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covered_and_flagged_count_as_covered() {
        assert!(CellState::Covered.is_covered());
        assert!(CellState::Flagged.is_covered());
        assert!(!CellState::Uncovered.is_covered());
    }
}

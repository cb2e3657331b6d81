/// One axis of the grid; also bounds board width and height.
pub type Coord = u8;

/// Area-sized counts: total cells, mines, flags.
pub type CellCount = u16;

/// An `(x, y)` position on the grid.
pub type Coord2 = (Coord, Coord);

/// Conversion into an `ndarray` index, with `x` as the first axis.
pub trait GridIndex {
    fn nd(self) -> [usize; 2];
}

impl GridIndex for Coord2 {
    fn nd(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

const NEIGHBOR_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the up-to-eight compass neighbors of `center`, clipped to a
/// `bounds.0` by `bounds.1` grid.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = center.0 as i16 + dx;
        let y = center.1 as i16 + dy;
        if x < 0 || y < 0 || x >= bounds.0 as i16 || y >= bounds.1 as i16 {
            return None;
        }
        Some((x as Coord, y as Coord))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let found: Vec<_> = neighbors((1, 1), (3, 3)).collect();
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn corner_and_edge_cells_are_clipped() {
        assert_eq!(neighbors((0, 0), (3, 3)).count(), 3);
        assert_eq!(neighbors((2, 2), (3, 3)).count(), 3);
        assert_eq!(neighbors((1, 0), (3, 3)).count(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        for pos in neighbors((7, 0), (8, 8)) {
            assert!(pos.0 < 8 && pos.1 < 8);
        }
    }

    #[test]
    fn mult_widens_before_multiplying() {
        assert_eq!(mult(255, 255), 65025);
        assert_eq!(mult(8, 8), 64);
    }
}

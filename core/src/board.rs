use alloc::collections::VecDeque;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player gesture, already translated from raw input by the presentation
/// layer. The serde shape is `{ "kind": ..., "x": ..., "y": ... }`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Action {
    Uncover { x: Coord, y: Coord },
    ToggleMark { x: Coord, y: Coord },
}

impl Action {
    pub const fn uncover(x: Coord, y: Coord) -> Self {
        Self::Uncover { x, y }
    }

    pub const fn toggle_mark(x: Coord, y: Coord) -> Self {
        Self::ToggleMark { x, y }
    }

    pub const fn coords(self) -> Coord2 {
        match self {
            Self::Uncover { x, y } | Self::ToggleMark { x, y } => (x, y),
        }
    }
}

/// What a transition did, so consumers can skip rendering unchanged frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    NoChange,
    Marked,
    Uncovered,
    Exploded,
    Won,
}

impl ApplyOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exploded | Self::Won)
    }
}

/// Immutable snapshot of the full game: fixed mine placement plus the
/// per-cell covered/flagged/uncovered grid. Transitions produce a fresh
/// `Board`; the input value is never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    minefield: Minefield,
    grid: Array2<CellState>,
}

impl Board {
    pub fn new(minefield: Minefield) -> Self {
        let grid = Array2::from_elem(minefield.grid_dim(), CellState::Covered);
        Self { minefield, grid }
    }

    pub fn generate<G: MinefieldGenerator>(config: BoardConfig, generator: G) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn random(config: BoardConfig, seed: u64) -> Self {
        Self::generate(config, RandomMinefieldGenerator::new(seed))
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn width(&self) -> Coord {
        self.minefield.width()
    }

    pub fn height(&self) -> Coord {
        self.minefield.height()
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    pub fn state_at(&self, coords: Coord2) -> CellState {
        self.grid[coords.nd()]
    }

    /// Read model for one cell.
    ///
    /// Panics when `coords` lie outside the grid, like any indexing read;
    /// actions go through `apply`, which checks bounds instead.
    pub fn cell_at(&self, coords: Coord2) -> CellView {
        let state = self.grid[coords.nd()];
        CellView {
            x: coords.0,
            y: coords.1,
            is_mine: self.minefield.contains_mine(coords),
            adjacent_mines: self.minefield.adjacent_mines(coords),
            is_uncovered: matches!(state, CellState::Uncovered),
            is_flagged: matches!(state, CellState::Flagged),
        }
    }

    /// Row-major iteration over the whole read model.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.grid
            .indexed_iter()
            .map(|((x, y), _)| self.cell_at((x as Coord, y as Coord)))
    }

    /// True once any mine has been uncovered. Derived, never stored.
    pub fn is_game_over(&self) -> bool {
        self.cells().any(|cell| cell.is_mine && cell.is_uncovered)
    }

    /// True once every safe cell is uncovered and every mine is flagged.
    /// A covered, unflagged mine is not yet a win.
    pub fn is_game_won(&self) -> bool {
        self.cells()
            .all(|cell| (cell.is_uncovered && !cell.is_mine) || (cell.is_flagged && cell.is_mine))
    }

    /// Mines minus flags; negative when over-flagged. Informational only.
    pub fn remaining_marks(&self) -> isize {
        let flagged = self
            .grid
            .iter()
            .filter(|state| matches!(state, CellState::Flagged))
            .count();
        self.minefield.mine_count() as isize - flagged as isize
    }

    /// Applies one action and returns the next board. Out-of-bounds
    /// coordinates fail fast; a finished game absorbs every action
    /// unchanged.
    pub fn apply(&self, action: Action) -> Result<(Self, ApplyOutcome)> {
        let coords = self.minefield.validate_coords(action.coords())?;

        if self.is_game_over() || self.is_game_won() {
            return Ok((self.clone(), ApplyOutcome::NoChange));
        }

        Ok(match action {
            Action::Uncover { .. } => self.uncover(coords),
            Action::ToggleMark { .. } => self.toggle_mark(coords),
        })
    }

    fn toggle_mark(&self, coords: Coord2) -> (Self, ApplyOutcome) {
        let mut next = self.clone();
        match next.grid[coords.nd()] {
            CellState::Uncovered => return (next, ApplyOutcome::NoChange),
            CellState::Covered => next.grid[coords.nd()] = CellState::Flagged,
            CellState::Flagged => next.grid[coords.nd()] = CellState::Covered,
        }

        if next.is_game_won() {
            log::debug!("flag at {:?} completed the board", coords);
            (next, ApplyOutcome::Won)
        } else {
            (next, ApplyOutcome::Marked)
        }
    }

    fn uncover(&self, coords: Coord2) -> (Self, ApplyOutcome) {
        // A flagged target must be unmarked first.
        if matches!(self.grid[coords.nd()], CellState::Flagged) {
            return (self.clone(), ApplyOutcome::NoChange);
        }

        let mut next = self.clone();
        let newly = next.flood_uncover(coords);

        let outcome = if next.is_game_over() {
            log::debug!("uncovered a mine at {:?}", coords);
            ApplyOutcome::Exploded
        } else if next.is_game_won() {
            ApplyOutcome::Won
        } else if newly == 0 {
            ApplyOutcome::NoChange
        } else {
            ApplyOutcome::Uncovered
        };
        (next, outcome)
    }

    /// Uncovers the connected zero-count region around `seed` plus its
    /// border. Returns how many cells changed state.
    fn flood_uncover(&mut self, seed: Coord2) -> usize {
        let bounds = self.minefield.size();
        let mut visited: HashSet<Coord2> = HashSet::new();
        let mut queue = VecDeque::from([seed]);

        while let Some(coords) = queue.pop_front() {
            if visited.contains(&coords) {
                continue;
            }
            // Flagged cells are never auto-uncovered, not even mid-flood.
            if matches!(self.grid[coords.nd()], CellState::Flagged) {
                log::trace!("flood skipping flagged cell {:?}", coords);
                continue;
            }
            visited.insert(coords);

            if !self.minefield.contains_mine(coords) && self.minefield.adjacent_mines(coords) == 0 {
                queue.extend(neighbors(coords, bounds));
            }
        }

        let mut newly = 0;
        for &coords in &visited {
            if !matches!(self.grid[coords.nd()], CellState::Uncovered) {
                self.grid[coords.nd()] = CellState::Uncovered;
                log::trace!(
                    "uncovered {:?}, adjacent mines: {}",
                    coords,
                    self.minefield.adjacent_mines(coords)
                );
                newly += 1;
            }
        }
        newly
    }
}

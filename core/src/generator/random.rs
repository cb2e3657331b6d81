use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Chooses `config.mines()` distinct cells uniformly without replacement.
/// Deterministic for a given seed; callers supply entropy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: BoardConfig) -> Minefield {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let height = config.height() as usize;
        let total = config.total_cells() as usize;

        let mut mines = Array2::from_elem((config.width() as usize, height), false);
        for index in rand::seq::index::sample(&mut rng, total, config.mines() as usize) {
            mines[[index / height, index % height]] = true;
        }

        let field = Minefield::from_mask(mines);
        if field.mine_count() != config.mines() {
            log::warn!(
                "mine placement mismatch: requested {}, placed {}",
                config.mines(),
                field.mine_count()
            );
        }
        field
    }
}

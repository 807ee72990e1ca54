use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Uniform placement by rejection: draw random coordinates and keep the ones not already mined.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator<R = SmallRng> {
    rng: R,
}

impl RandomMineGenerator<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(mut self, config: BoardConfig) -> MineLayout {
        let size = config.size.max(1);
        let total_cells = CellCount::from(size).pow(2);
        let mut mine_count = config.mine_count();

        if mine_count > total_cells {
            log::warn!(
                "Board already full, requested {} mines but only {} cells fit",
                mine_count,
                total_cells
            );
            mine_count = total_cells;
        }

        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());
        let mut mines_left = mine_count;
        let mut draws: u32 = 0;
        while mines_left > 0 {
            let coords: Coord2 = (
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            draws += 1;
            let cell = &mut mine_mask[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_left -= 1;
            }
        }
        log::trace!("Placed {} mines in {} draws", mine_count, draws);

        MineLayout {
            mine_mask,
            mine_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord, difficulty: Difficulty) -> BoardConfig {
        BoardConfig::new(size, difficulty).unwrap()
    }

    #[test]
    fn places_exact_mine_count() {
        for difficulty in Difficulty::ALL {
            for size in [1, 2, 5, 16, 40] {
                let config = config(size, difficulty);
                let layout = RandomMineGenerator::seeded(u64::from(size)).generate(config);

                assert_eq!(layout.size(), size);
                assert_eq!(layout.mine_count(), config.mine_count());
                assert_eq!(
                    layout.mine_coords().count(),
                    usize::from(config.mine_count())
                );
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = config(12, Difficulty::Hard);
        let a = RandomMineGenerator::seeded(42).generate(config);
        let b = RandomMineGenerator::seeded(42).generate(config);

        assert_eq!(a, b);
    }

    #[test]
    fn accepts_borrowed_rng() {
        let mut rng = SmallRng::seed_from_u64(7);
        let config = config(9, Difficulty::Medium);

        let first = RandomMineGenerator::from_rng(&mut rng).generate(config);
        let second = RandomMineGenerator::from_rng(&mut rng).generate(config);

        assert_eq!(first.mine_count(), 24);
        assert_eq!(second.mine_count(), 24);
    }
}

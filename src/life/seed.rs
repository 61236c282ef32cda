use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::life::grid::Grid;
use crate::life::patterns::Pattern;

/// Fraction of cells alive after random seeding, unless configured.
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Fills a freshly allocated grid with the first generation.
pub trait Seeder {
    fn seed(&mut self, grid: &mut Grid);
}

/// Marks each cell alive independently with probability `density`.
pub struct RandomSeeder<R: Rng> {
    rng: R,
    density: f64,
}

impl<R: Rng> RandomSeeder<R> {
    pub fn new(rng: R, density: f64) -> Self {
        Self { rng, density }
    }
}

impl RandomSeeder<SmallRng> {
    /// Reproducible board for a given seed.
    pub fn from_seed(seed: u64, density: f64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed), density)
    }

    /// Different board on every run.
    pub fn from_entropy(density: f64) -> Self {
        Self::new(SmallRng::from_os_rng(), density)
    }
}

impl<R: Rng> Seeder for RandomSeeder<R> {
    fn seed(&mut self, grid: &mut Grid) {
        let (width, height) = (grid.width() as i64, grid.height() as i64);
        for y in 0..height {
            for x in 0..width {
                let alive = self.rng.random::<f64>() < self.density;
                grid.set(x, y, alive);
            }
        }
    }
}

/// Places a built-in pattern centered on an otherwise dead board.
pub struct PatternSeeder {
    pattern: Pattern,
}

impl PatternSeeder {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }
}

impl Seeder for PatternSeeder {
    fn seed(&mut self, grid: &mut Grid) {
        grid.clear();
        let (pw, ph) = self.pattern.extent();
        let left = (grid.width() as i64 - pw) / 2;
        let top = (grid.height() as i64 - ph) / 2;
        for &(x, y) in self.pattern.cells() {
            grid.set(left + x, top + y, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_board() {
        let mut a = Grid::new(10, 10).unwrap();
        let mut b = Grid::new(10, 10).unwrap();
        RandomSeeder::from_seed(7, DEFAULT_DENSITY).seed(&mut a);
        RandomSeeder::from_seed(7, DEFAULT_DENSITY).seed(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn density_bounds_are_exact() {
        let mut grid = Grid::new(10, 10).unwrap();
        RandomSeeder::from_seed(1, 0.0).seed(&mut grid);
        assert!(grid.is_extinct());
        RandomSeeder::from_seed(1, 1.0).seed(&mut grid);
        assert_eq!(grid.population(), 100);
    }

    #[test]
    fn pattern_is_placed_whole() {
        for pattern in Pattern::ALL {
            let mut grid = Grid::new(10, 10).unwrap();
            PatternSeeder::new(pattern).seed(&mut grid);
            assert_eq!(grid.population(), pattern.cells().len(), "{}", pattern.name());
        }
    }
}

use super::{Cell, Coordinate, SpeciesId};

/// Represents a pattern that can be placed into a world
#[derive(Clone, Debug)]
pub struct Pattern {
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    pub fn new(cells: Vec<(usize, usize)>) -> Self {
        Self { cells }
    }

    /// Live cells of the pattern placed at `origin`, all of one species
    pub fn cells_at(&self, origin: Coordinate, species: SpeciesId) -> Vec<Cell> {
        self.cells
            .iter()
            .map(|&(dx, dy)| Cell::alive(Coordinate::new(origin.x() + dx, origin.y() + dy), species))
            .collect()
    }
}

/// Classic Game of Life patterns, plus random soups
pub mod presets {
    use super::*;
    use crate::domain::{DomainError, GridSize, World};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Reproducible RNG for soups
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Random world: each cell lives with probability `density`,
    /// species drawn uniformly from `0..species_count`
    pub fn random_soup(
        size: GridSize,
        species_count: u32,
        density: f64,
        rng: &mut impl Rng,
    ) -> Result<World, DomainError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(DomainError::invalid_value(format!(
                "density must be within [0, 1], got {density}"
            )));
        }
        if species_count == 0 {
            return Err(DomainError::invalid_world(
                "value of element 'species' must be positive number",
            ));
        }

        let cells: Vec<Cell> = size
            .coordinates()
            .filter_map(|c| {
                rng.random_bool(density)
                    .then(|| Cell::alive(c, SpeciesId::new(rng.random_range(0..species_count))))
            })
            .collect();
        World::new(size, species_count, cells)
    }
}

use rayon::prelude::*;
use tracing::debug;

use super::{Algorithm, Cell, Coordinate, EvolutionRule, World, default_rule};

/// EvolutionService steps a whole World forward one generation
/// by asking its rule about every cell of the grid.
pub struct EvolutionService {
    rule: Box<dyn EvolutionRule>,
}

impl EvolutionService {
    pub fn new(rule: Box<dyn EvolutionRule>) -> Self {
        Self { rule }
    }

    /// Pure functional evolution - returns the next generation (serial).
    /// Every coordinate is visited in row-major order; nothing is carried
    /// over incrementally from the previous world.
    pub fn next(&self, world: &World) -> World {
        let alive: Vec<Cell> = world
            .size()
            .coordinates()
            .filter_map(|c| self.next_cell(world, c))
            .collect();

        self.rebuild(world, alive)
    }

    /// Parallel evolution using rayon, one task per row.
    /// Each row only reads the previous immutable world.
    pub fn next_parallel(&self, world: &World) -> World {
        let n = world.size().cells();
        let alive: Vec<Cell> = (0..n)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..n).filter_map(move |x| self.next_cell(world, Coordinate::new(x, y)))
            })
            .collect();

        self.rebuild(world, alive)
    }

    /// Dispatch to the selected algorithm
    pub fn evolve(&self, world: &World, algorithm: Algorithm) -> World {
        match algorithm {
            Algorithm::Serial => self.next(world),
            Algorithm::Parallel => self.next_parallel(world),
        }
    }

    fn next_cell(&self, world: &World, coordinate: Coordinate) -> Option<Cell> {
        self.rule
            .will_be_alive(world, coordinate)
            .map(|species| Cell::alive(coordinate, species))
    }

    fn rebuild(&self, world: &World, alive: Vec<Cell>) -> World {
        debug!(population = alive.len(), "generation evolved");
        world.successor(alive)
    }
}

impl Default for EvolutionService {
    fn default() -> Self {
        Self::new(default_rule())
    }
}

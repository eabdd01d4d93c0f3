use std::collections::{BTreeMap, HashMap};

use super::error::{DomainError, Result};
use super::{Cell, Coordinate, GridSize, SpeciesId};

/// World is one generation of the simulation.
/// Only live cells are stored, in a sparse map keyed by coordinate.
/// There is no mutation API: the next generation is always a new World.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct World {
    size: GridSize,
    species_count: u32,
    alive: HashMap<Coordinate, Cell>,
}

impl World {
    /// Build a world from its live population.
    /// If two cells share a coordinate, the later one wins.
    pub fn new(
        size: GridSize,
        species_count: u32,
        alive_cells: impl IntoIterator<Item = Cell>,
    ) -> Result<Self> {
        if species_count == 0 {
            return Err(DomainError::invalid_world(
                "value of element 'species' must be positive number",
            ));
        }

        let alive = alive_cells
            .into_iter()
            .try_fold(HashMap::new(), |mut alive, cell| {
                if !cell.is_alive() {
                    return Err(DomainError::invalid_world(format!(
                        "world expects alive cells, got dead cell at {}",
                        cell.coordinate()
                    )));
                }
                alive.insert(cell.coordinate(), cell);
                Ok(alive)
            })?;

        Ok(Self { size, species_count, alive })
    }

    /// Next generation with the same size and species count.
    /// Callers pass live cells inside the grid only; the size and species
    /// count were validated when `self` was built.
    pub(crate) fn successor(&self, alive_cells: impl IntoIterator<Item = Cell>) -> Self {
        let alive = alive_cells
            .into_iter()
            .map(|cell| {
                debug_assert!(cell.is_alive(), "dead cell at {} in next generation", cell.coordinate());
                (cell.coordinate(), cell)
            })
            .collect();
        Self { size: self.size, species_count: self.species_count, alive }
    }

    /// World with no live cells
    pub fn empty(size: GridSize, species_count: u32) -> Result<Self> {
        Self::new(size, species_count, std::iter::empty())
    }

    pub const fn size(&self) -> GridSize {
        self.size
    }

    pub const fn species_count(&self) -> u32 {
        self.species_count
    }

    pub fn is_alive_at(&self, coordinate: Coordinate) -> bool {
        self.alive.contains_key(&coordinate)
    }

    /// Species living at the coordinate, None if the cell is dead
    pub fn species_at(&self, coordinate: Coordinate) -> Option<SpeciesId> {
        self.alive.get(&coordinate).and_then(Cell::species)
    }

    /// Live cells in no particular order
    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.alive.values()
    }

    /// Live cells ordered by (y, x), for stable output
    pub fn sorted_alive_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.alive.values().copied().collect();
        cells.sort_by_key(Cell::coordinate);
        cells
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Number of live cells per species
    pub fn species_census(&self) -> BTreeMap<SpeciesId, usize> {
        self.alive
            .values()
            .filter_map(Cell::species)
            .fold(BTreeMap::new(), |mut census, species| {
                *census.entry(species).or_insert(0) += 1;
                census
            })
    }
}

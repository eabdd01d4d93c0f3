use super::error::{DomainError, Result};
use super::{Coordinate, SpeciesId};

/// Life state of a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }
}

/// Cell is one square of the world: where it is, whether it lives,
/// and which species it belongs to.
/// A live cell always carries a species, a dead one never does.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    coordinate: Coordinate,
    state: CellState,
    species: Option<SpeciesId>,
}

impl Cell {
    /// Generic constructor, validates that state and species agree
    pub fn new(coordinate: Coordinate, state: CellState, species: Option<SpeciesId>) -> Result<Self> {
        match (state, species) {
            (CellState::Alive, None) => Err(DomainError::invalid_cell(format!(
                "alive cell at {coordinate} must have species"
            ))),
            (CellState::Dead, Some(species)) => Err(DomainError::invalid_cell(format!(
                "dead cell at {coordinate} cannot carry species {species}"
            ))),
            _ => Ok(Self { coordinate, state, species }),
        }
    }

    pub const fn dead(coordinate: Coordinate) -> Self {
        Self { coordinate, state: CellState::Dead, species: None }
    }

    pub const fn alive(coordinate: Coordinate, species: SpeciesId) -> Self {
        Self { coordinate, state: CellState::Alive, species: Some(species) }
    }

    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn species(&self) -> Option<SpeciesId> {
        self.species
    }

    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}

mod algorithm;
mod cell;
mod coordinate;
mod error;
mod evolution;
mod patterns;
mod rules;
mod species;
mod world;

pub use algorithm::Algorithm;
pub use cell::{Cell, CellState};
pub use coordinate::{Coordinate, GridSize};
pub use error::{DomainError, Result};
pub use evolution::EvolutionService;
pub use patterns::{Pattern, presets};
pub use rules::{ConwayMultiSpeciesRule, EvolutionRule, RuleKind, ToroidalMultiSpeciesRule, default_rule};
pub use species::SpeciesId;
pub use world::World;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and ports
pub mod application;

// Infrastructure layer - XML input/output
pub mod infrastructure;

// Re-exports for convenience
pub use domain::{
    Algorithm, Cell, CellState, ConwayMultiSpeciesRule, Coordinate, DomainError, EvolutionRule,
    EvolutionService, GridSize, RuleKind, SpeciesId, World,
};
pub use application::{RunSimulation, Simulation, SimulationConfig, SimulationError};
pub use infrastructure::{ConflictPolicy, XmlInputReader, XmlOutputWriter};

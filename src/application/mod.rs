mod config;
mod ports;
mod simulation;

pub use config::SimulationConfig;
pub use ports::{InputError, InputReader, OutputError, OutputWriter};
pub use simulation::{RunSimulation, Simulation, SimulationError};

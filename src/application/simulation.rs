use std::path::Path;

use thiserror::Error;
use tracing::{info, instrument};

use super::{InputError, InputReader, OutputError, OutputWriter, SimulationConfig};
use crate::domain::{Algorithm, EvolutionRule, EvolutionService, World};

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid output: {0}")]
    Output(#[from] OutputError),
}

/// Simulation runs the evolution loop, free of any IO.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    service: EvolutionService,
    algorithm: Algorithm,
}

impl Simulation {
    pub fn new(rule: Box<dyn EvolutionRule>) -> Self {
        Self {
            service: EvolutionService::new(rule),
            algorithm: Algorithm::default(),
        }
    }

    /// Set the evolution algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Generation history: the initial world followed by exactly
    /// `config.iterations` evolved worlds
    pub fn generations(&self, config: &SimulationConfig, initial: World) -> Vec<World> {
        let mut generations = vec![initial];
        for _ in 0..config.iterations {
            let next = self.service.evolve(&generations[generations.len() - 1], self.algorithm);
            generations.push(next);
        }
        generations
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            service: EvolutionService::default(),
            algorithm: Algorithm::default(),
        }
    }
}

/// Use case: read the initial world, evolve it, write the history.
pub struct RunSimulation<R, W> {
    reader: R,
    writer: W,
    simulation: Simulation,
}

impl<R: InputReader, W: OutputWriter> RunSimulation<R, W> {
    pub fn new(reader: R, writer: W, simulation: Simulation) -> Self {
        Self { reader, writer, simulation }
    }

    /// Runs the whole pipeline and returns the generation history that was written
    #[instrument(skip(self), fields(algorithm = self.simulation.algorithm().name()))]
    pub fn run(&self, input: &Path, output: &Path) -> Result<Vec<World>, SimulationError> {
        let (config, initial) = self.reader.read(input)?;
        info!(
            size = config.size.cells(),
            species = initial.species_count(),
            population = initial.population(),
            iterations = config.iterations,
            "simulation loaded"
        );

        let generations = self.simulation.generations(&config, initial);

        self.writer.write(output, &generations)?;
        if let Some(last) = generations.last() {
            info!(
                population = last.population(),
                census = ?last.species_census(),
                "simulation written"
            );
        }
        Ok(generations)
    }
}

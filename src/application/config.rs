use crate::domain::GridSize;

/// Parameters of a single simulation run, as read from the input document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub size: GridSize,
    /// Generations to compute after the initial one. Zero is valid.
    pub iterations: u64,
}

impl SimulationConfig {
    pub const fn new(size: GridSize, iterations: u64) -> Self {
        Self { size, iterations }
    }
}

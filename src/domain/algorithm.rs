//! Algorithm enum for selecting how a generation is scanned.
//!
//! Both variants compute identical worlds; they only differ in how the
//! O(size²) scan is scheduled.

/// Available generation-stepping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Row-major scan on the calling thread
    #[default]
    Serial,
    /// Rows scanned in parallel with rayon, merged into one world
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and benchmark tables
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Sparse world, cell-by-cell, single thread",
            Algorithm::Parallel => "Sparse world, rows split across rayon workers",
        }
    }
}
